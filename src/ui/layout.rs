use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split the screen into header, body and footer.
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

/// Split the body into the sheet, the total box and the results.
pub fn body_regions(body: Rect, result_lines: u16) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(result_lines.saturating_add(2)),
        ])
        .split(body);
    (chunks[0], chunks[1], chunks[2])
}

/// First visible line so that `focused_line` stays on screen.
pub fn scroll_offset(focused_line: usize, height: usize) -> usize {
    if height == 0 {
        return focused_line;
    }
    focused_line.saturating_sub(height - 1)
}
