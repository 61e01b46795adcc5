use crate::ui::sheet::Field;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const SEPARATOR: &str = " │ ";

/// Key hints for the focused field, most specific first.
pub fn hints(focus: Field) -> Vec<&'static str> {
    let mut hints = match focus {
        Field::Name(_) | Field::Order(_) => vec!["Ctrl+D: Delete person"],
        Field::Total => vec!["Enter: Confirm"],
        Field::SharedCost => vec![],
    };
    hints.extend(["Tab: Next", "Ctrl+N: Add", "Ctrl+T: Confirm", "Ctrl+Q: Quit"]);
    hints
}

/// Bottom bar: hints on the left, version on the right. Hints that don't
/// fit are dropped from the end.
pub fn footer_widget(focus: Field, area: Rect) -> Paragraph<'static> {
    let version = format!("v{} ", VERSION);
    let available = (area.width.saturating_sub(2) as usize)
        .saturating_sub(version.chars().count() + 1);

    let mut text = String::new();
    for hint in hints(focus) {
        let extra = if text.is_empty() { 0 } else { SEPARATOR.chars().count() };
        if text.chars().count() + extra + hint.chars().count() + 1 > available {
            break;
        }
        if !text.is_empty() {
            text.push_str(SEPARATOR);
        }
        text.push_str(hint);
    }
    let text = format!(" {text}");
    let padding = (area.width.saturating_sub(2) as usize)
        .saturating_sub(text.chars().count() + version.chars().count());

    let style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    Paragraph::new(Line::from(vec![
        Span::raw(text),
        Span::raw(" ".repeat(padding)),
        Span::raw(version),
    ]))
    .style(style)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::ParticipantId;

    #[test]
    fn row_focus_offers_delete() {
        let focus = Field::Order(ParticipantId::new());
        assert_eq!(hints(focus)[0], "Ctrl+D: Delete person");
    }

    #[test]
    fn shared_cost_has_only_global_hints() {
        assert_eq!(
            hints(Field::SharedCost),
            vec!["Tab: Next", "Ctrl+N: Add", "Ctrl+T: Confirm", "Ctrl+Q: Quit"]
        );
    }
}
