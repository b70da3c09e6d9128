use crate::ui::display::DisplayState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, display: &DisplayState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let accent_style = Style::default().fg(display.current_color().into());
        // A failed fetch looks the same as a pending one.
        let status = if display.is_waiting() {
            "Loading…".to_string()
        } else {
            format!("{} quotes", display.quotes().len())
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("●", accent_style),
            Span::styled("  ", text_style),
            Span::styled("Random Quote", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(display.current_color().to_string(), accent_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
