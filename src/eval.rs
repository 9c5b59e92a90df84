//! Keypad expression evaluation.
//!
//! The calculator builds strings out of digits and the display glyphs
//! `+ - × ÷`. [`evaluate`] turns such a string into a non-negative integer
//! and never fails: malformed input degrades to the longest leading integer
//! literal of the raw string, then to zero.

use thiserror::Error;

/// Errors produced while parsing a keypad expression.
///
/// These never escape [`evaluate`]; they select the fallback path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
    #[error("expression ended after an operator")]
    UnexpectedEnd,
    #[error("trailing input after expression")]
    TrailingInput,
    #[error("division by zero")]
    DivisionByZero,
    #[error("result is not finite")]
    NonFinite,
}

/// Evaluate a keypad expression to a non-negative integer.
///
/// `×`/`÷` are normalized to `*`/`/`, precedence is conventional
/// (multiplication and division bind tighter), and the final value is
/// floored. Empty input and the initial `"0"` evaluate to 0. Results below
/// zero are clamped to 0.
pub fn evaluate(input: &str) -> i64 {
    if input.is_empty() || input == "0" {
        return 0;
    }

    let normalized: String = input
        .chars()
        .map(|c| match c {
            '×' => '*',
            '÷' => '/',
            other => other,
        })
        .collect();

    match parse(&normalized) {
        Ok(value) => (value.floor() as i64).max(0),
        Err(err) => {
            tracing::debug!(input, %err, "expression rejected, using leading integer");
            leading_integer(input).max(0)
        }
    }
}

fn parse(expr: &str) -> Result<f64, EvalError> {
    let mut parser = Parser {
        chars: expr.chars().collect(),
        pos: 0,
    };
    let value = parser.expression()?;
    if parser.pos != parser.chars.len() {
        return Err(EvalError::TrailingInput);
    }
    if !value.is_finite() {
        return Err(EvalError::NonFinite);
    }
    Ok(value)
}

/// Recursive-descent parser over the normalized expression.
///
/// Arithmetic runs in `f64` so intermediate fractions survive until the
/// final floor (`7/2*2` is 7, not 6).
struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// expression := term (('+' | '-') term)*
    fn expression(&mut self) -> Result<f64, EvalError> {
        let mut value = self.term()?;
        while let Some(op) = self.peek() {
            match op {
                '+' => {
                    self.pos += 1;
                    value += self.term()?;
                }
                '-' => {
                    self.pos += 1;
                    value -= self.term()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    /// term := factor (('*' | '/') factor)*
    fn term(&mut self) -> Result<f64, EvalError> {
        let mut value = self.factor()?;
        while let Some(op) = self.peek() {
            match op {
                '*' => {
                    self.pos += 1;
                    value *= self.factor()?;
                }
                '/' => {
                    self.pos += 1;
                    let divisor = self.factor()?;
                    if divisor == 0.0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    value /= divisor;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    /// factor := ('+' | '-')* integer
    fn factor(&mut self) -> Result<f64, EvalError> {
        match self.peek() {
            Some('-') => {
                self.pos += 1;
                Ok(-self.factor()?)
            }
            Some('+') => {
                self.pos += 1;
                self.factor()
            }
            Some(c) if c.is_ascii_digit() => Ok(self.integer()),
            Some(c) => Err(EvalError::UnexpectedChar(c)),
            None => Err(EvalError::UnexpectedEnd),
        }
    }

    fn integer(&mut self) -> f64 {
        let mut value = 0f64;
        while let Some(digit) = self.peek().and_then(|c| c.to_digit(10)) {
            self.pos += 1;
            value = value * 10.0 + f64::from(digit);
        }
        value
    }
}

/// Longest leading integer literal of the raw keypad string: an optional
/// sign followed by digits. Saturates on overflow.
fn leading_integer(input: &str) -> i64 {
    let mut chars = input.chars().peekable();
    let negative = match chars.peek() {
        Some('-') => {
            chars.next();
            true
        }
        Some('+') => {
            chars.next();
            false
        }
        _ => false,
    };
    let digits: String = chars.take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return 0;
    }
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    if negative {
        -magnitude
    } else {
        magnitude
    }
}
