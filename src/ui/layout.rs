use ratatui::layout::{Position, Rect};

/// Preferred card cell width; cells shrink below this only when a full row
/// of ten no longer fits the terminal.
pub const CARD_WIDTH: u16 = 9;
pub const CARD_GAP: u16 = 1;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Regions of the board screen: a sum line outside each card band, with the
/// divider between the two rows.
pub struct BoardLayout {
    pub top_sum: Rect,
    pub top_cards: Rect,
    pub divider: Rect,
    pub bottom_cards: Rect,
    pub bottom_sum: Rect,
}

pub fn board_layout(body: Rect) -> BoardLayout {
    let divider_height = 1.min(body.height);
    let band_height = body.height.saturating_sub(divider_height) / 2;
    let top = Rect {
        x: body.x,
        y: body.y,
        width: body.width,
        height: band_height,
    };
    let divider = Rect {
        x: body.x,
        y: body.y + band_height,
        width: body.width,
        height: divider_height,
    };
    let bottom = Rect {
        x: body.x,
        y: body.y + band_height + divider_height,
        width: body.width,
        height: body
            .height
            .saturating_sub(band_height + divider_height),
    };

    let sum_height = 1.min(top.height);
    let top_sum = Rect {
        height: sum_height,
        ..top
    };
    let top_cards = Rect {
        y: top.y + sum_height,
        height: top.height.saturating_sub(sum_height),
        ..top
    };
    let bottom_sum_height = 1.min(bottom.height);
    let bottom_cards = Rect {
        height: bottom.height.saturating_sub(bottom_sum_height),
        ..bottom
    };
    let bottom_sum = Rect {
        y: bottom.y + bottom_cards.height,
        height: bottom_sum_height,
        ..bottom
    };

    BoardLayout {
        top_sum,
        top_cards,
        divider,
        bottom_cards,
        bottom_sum,
    }
}

/// Centered card cells for a row.
///
/// Shared by the renderer and drop hit-testing so a release resolves on the
/// same rectangles the user sees.
pub fn card_cells(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 || area.width == 0 || area.height == 0 {
        return Vec::new();
    }
    let count = count as u16;
    let gaps = CARD_GAP * (count - 1);
    let fit = area.width.saturating_sub(gaps) / count;
    let width = fit.min(CARD_WIDTH).max(1);
    let total = width * count + gaps;
    let x0 = area.x + area.width.saturating_sub(total) / 2;
    (0..count)
        .map(|i| Rect {
            x: x0 + i * (width + CARD_GAP),
            y: area.y,
            width,
            height: area.height,
        })
        .collect()
}

/// Index of the cell containing the given terminal position, if any.
pub fn cell_at(cells: &[Rect], column: u16, row: u16) -> Option<usize> {
    cells
        .iter()
        .position(|cell| cell.contains(Position::new(column, row)))
}

pub fn centered_rect_by_size(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
