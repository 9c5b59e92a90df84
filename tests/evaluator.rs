use duelcalc::eval::evaluate;

// -- plain arithmetic ---------------------------------------------------------

#[test]
fn empty_input_is_zero() {
    assert_eq!(evaluate(""), 0);
}

#[test]
fn default_zero_is_zero() {
    assert_eq!(evaluate("0"), 0);
}

#[test]
fn single_number() {
    assert_eq!(evaluate("42"), 42);
}

#[test]
fn addition_and_subtraction_left_to_right() {
    assert_eq!(evaluate("12+3-5"), 10);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(evaluate("2+3×4"), 14);
}

#[test]
fn division_floors() {
    assert_eq!(evaluate("7÷2"), 3);
}

#[test]
fn fractions_survive_until_the_final_floor() {
    // 7/2 = 3.5 stays fractional through the multiply.
    assert_eq!(evaluate("7÷2×2"), 7);
}

#[test]
fn keypad_glyphs_normalize() {
    assert_eq!(evaluate("6×7"), 42);
    assert_eq!(evaluate("8÷4"), 2);
}

#[test]
fn leading_zeroes_parse() {
    assert_eq!(evaluate("007"), 7);
}

#[test]
fn unary_minus_clamps_to_zero() {
    assert_eq!(evaluate("-5"), 0);
}

#[test]
fn negative_result_clamps_to_zero() {
    assert_eq!(evaluate("3-10"), 0);
}

#[test]
fn negative_product_clamps_to_zero() {
    assert_eq!(evaluate("5×-2"), 0);
}

// -- fallback -----------------------------------------------------------------

#[test]
fn trailing_operator_falls_back_to_leading_integer() {
    assert_eq!(evaluate("12+"), 12);
}

#[test]
fn division_by_zero_falls_back_to_leading_integer() {
    assert_eq!(evaluate("12÷0"), 12);
}

#[test]
fn leading_operator_falls_back_to_zero() {
    assert_eq!(evaluate("×3"), 0);
}

#[test]
fn negative_fallback_clamps_to_zero() {
    assert_eq!(evaluate("-7+"), 0);
}

// -- results stay non-negative ------------------------------------------------

#[test]
fn results_are_never_negative() {
    for input in ["1-2", "0-0", "9÷2-5", "-1×3", "2×2-9", "÷", "--", "8÷0-1"] {
        assert!(evaluate(input) >= 0, "evaluate({:?}) went negative", input);
    }
}
