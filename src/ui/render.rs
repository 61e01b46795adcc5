use crate::split::{Distribution, NO_DISTRIBUTION_MESSAGE};
use crate::ui::app::App;
use crate::ui::footer::footer_widget;
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, layout_regions, scroll_offset};
use crate::ui::sheet::{Field, SheetState};
use crate::ui::theme::{
    row_background, share_foreground, ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED, PLACEHOLDER,
    SHARED_ITEM_BG,
};
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const NAME_WIDTH: usize = 20;
const NUMBER_WIDTH: usize = 10;

/// A rendered line plus the column where the cursor sits if it holds focus.
struct SheetLine {
    line: Line<'static>,
    cursor: Option<u16>,
}

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(
        Header::new().widget(app.store().len(), app.confirm_state().is_confirmed()),
        header,
    );

    let results = result_lines(app);
    let (sheet_area, total_area, results_area) = body_regions(body, results.len() as u16);
    draw_sheet(frame, app.sheet(), sheet_area);
    draw_total(frame, app.sheet(), total_area);
    frame.render_widget(
        Paragraph::new(results).block(bordered(" Shares ")),
        results_area,
    );

    frame.render_widget(footer_widget(app.sheet().focus, footer), footer);
}

fn draw_sheet(frame: &mut Frame<'_>, sheet: &SheetState, area: Rect) {
    let block = bordered(" People ");
    let inner = block.inner(area);

    let mut lines = Vec::with_capacity(sheet.rows.len() + 2);
    lines.push(field_line(
        vec![Span::raw(" Shared item ")],
        sheet,
        Field::SharedCost,
        "0.00",
        NUMBER_WIDTH,
        Style::default().bg(SHARED_ITEM_BG),
    ));
    let count = sheet.rows.len();
    for (index, row) in sheet.rows.iter().enumerate() {
        let row_style = Style::default().bg(row_background(index, count));
        let mut name = field_line(
            vec![Span::raw(format!(" {:>2}. ", index + 1))],
            sheet,
            Field::Name(row.id),
            "Name",
            NAME_WIDTH,
            row_style,
        );
        let order = field_line(
            vec![Span::raw("  ")],
            sheet,
            Field::Order(row.id),
            "Order",
            NUMBER_WIDTH,
            row_style,
        );
        let offset = name.line.width() as u16;
        name.cursor = name.cursor.or(order.cursor.map(|x| x + offset));
        name.line.spans.extend(order.line.spans);
        lines.push(name);
    }
    lines.push(SheetLine {
        line: Line::from(Span::styled(
            " + Add Person (Ctrl+N)",
            Style::default().fg(ACCENT),
        )),
        cursor: None,
    });

    let focused_line = lines
        .iter()
        .position(|line| line.cursor.is_some())
        .unwrap_or(0);
    let offset = scroll_offset(focused_line, inner.height as usize);
    let cursor = lines[focused_line].cursor.map(|x| Position {
        x: inner.x + x.min(inner.width.saturating_sub(1)),
        y: inner.y + (focused_line - offset) as u16,
    });

    let text: Vec<Line> = lines.into_iter().map(|line| line.line).collect();
    frame.render_widget(
        Paragraph::new(text)
            .block(block)
            .scroll((offset as u16, 0)),
        area,
    );
    if let Some(position) = cursor {
        if inner.height > 0 {
            frame.set_cursor_position(position);
        }
    }
}

fn draw_total(frame: &mut Frame<'_>, sheet: &SheetState, area: Rect) {
    let block = bordered(" Total ");
    let inner = block.inner(area);
    let mut total = field_line(
        vec![Span::raw(" Bill total ")],
        sheet,
        Field::Total,
        "0.00",
        NUMBER_WIDTH,
        Style::default(),
    );
    total.line.spans.push(Span::styled(
        "  Enter or Ctrl+T to confirm",
        Style::default().fg(MUTED).add_modifier(Modifier::DIM),
    ));
    frame.render_widget(Paragraph::new(total.line).block(block), area);
    if let Some(x) = total.cursor {
        if inner.height > 0 && inner.width > 0 {
            frame.set_cursor_position(Position {
                x: inner.x + x.min(inner.width - 1),
                y: inner.y,
            });
        }
    }
}

/// `prefix` followed by the text of `field`, padded to `width`. Empty
/// fields show `placeholder`; the focused field is reversed.
fn field_line(
    prefix: Vec<Span<'static>>,
    sheet: &SheetState,
    field: Field,
    placeholder: &str,
    width: usize,
    style: Style,
) -> SheetLine {
    let text = sheet.text(field).unwrap_or_default();
    let focused = sheet.focus == field;
    let mut line = Line::from(prefix).style(style);
    let start = line.width() as u16;

    let (shown, field_style) = if text.is_empty() {
        (placeholder.to_string(), Style::default().fg(PLACEHOLDER))
    } else {
        (text.to_string(), Style::default().fg(HEADER_TEXT))
    };
    let field_style = if focused {
        field_style.add_modifier(Modifier::REVERSED)
    } else {
        field_style
    };
    line.spans
        .push(Span::styled(format!("{:<width$}", shown, width = width), field_style));

    let cursor = focused.then(|| start + Span::raw(text.to_string()).width() as u16);
    SheetLine { line, cursor }
}

fn result_lines(app: &App) -> Vec<Line<'static>> {
    match app.distribution() {
        None => vec![Line::from(Span::styled(
            " Confirm a total to see each share.",
            Style::default().fg(MUTED).add_modifier(Modifier::DIM),
        ))],
        Some(Distribution::NoValidDistribution) => vec![Line::from(Span::styled(
            format!(" {}", NO_DISTRIBUTION_MESSAGE),
            Style::default().fg(MUTED),
        ))],
        Some(Distribution::Shares(shares)) => {
            let sheet = app.sheet();
            let count = sheet.rows.len();
            shares
                .iter()
                .map(|share| {
                    let index = sheet.row_index(share.id).unwrap_or(0);
                    Line::from(Span::styled(
                        format!(" {}", share.format(app.currency())),
                        Style::default().fg(share_foreground(index, count)),
                    ))
                })
                .collect()
        }
    }
}

fn bordered(title: &'static str) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::ParticipantStore;
    use crate::storage::MemorySlotStore;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn make_app() -> App {
        App::new(ParticipantStore::load(Box::new(MemorySlotStore::new())), "$")
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn blank_sheet_shows_placeholders_and_hint() {
        let text = screen(&make_app());
        assert!(text.contains("Shared item"));
        assert!(text.contains("Name"));
        assert!(text.contains("Order"));
        assert!(text.contains("+ Add Person (Ctrl+N)"));
        assert!(text.contains("Confirm a total to see each share."));
    }

    #[test]
    fn confirmed_total_shows_shares() {
        let mut app = make_app();
        for ch in "Ann".chars() {
            app.type_char(ch);
        }
        app.focus_next();
        app.type_char('2');
        app.confirm_total();
        for ch in "40".chars() {
            app.type_char(ch);
        }
        app.on_enter();
        assert!(screen(&app).contains("Ann: $40.00"));
    }

    #[test]
    fn cleared_order_redraws_stored_value_after_tab() {
        let mut app = make_app();
        for ch in "Ann".chars() {
            app.type_char(ch);
        }
        app.focus_next();
        app.type_char('7');
        app.backspace();
        app.focus_next();
        let text = screen(&app);
        let row = text.lines().find(|line| line.contains("Ann")).unwrap();
        assert!(row.contains('7'), "row was {row:?}");
        assert!(!row.contains("Order"), "row was {row:?}");
    }

    #[test]
    fn zero_orders_show_message() {
        let mut app = make_app();
        app.confirm_total();
        app.type_char('9');
        app.on_enter();
        assert!(screen(&app).contains(NO_DISTRIBUTION_MESSAGE));
    }
}
