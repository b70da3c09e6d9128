use crate::ui::display::DisplayState;
use crate::ui::layout::{centered_rect_by_size, wrapped_height};
use crate::ui::theme::{QUOTE_BOX_BG, QUOTE_BOX_IDLE_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

const MIN_WIDTH: u16 = 40;
const MAX_WIDTH: u16 = 90;
const H_PADDING: u16 = 3;
const V_PADDING: u16 = 1;

/// The white card holding the quote, tinted with the accent color.
pub struct QuoteBox<'a> {
    display: &'a DisplayState,
}

impl<'a> QuoteBox<'a> {
    pub fn new(display: &'a DisplayState) -> Self {
        Self { display }
    }

    /// Card rect inside `body`, sized to the wrapped quote.
    pub fn area(&self, body: Rect) -> Rect {
        let width = (body.width * 4 / 5).clamp(MIN_WIDTH.min(body.width), MAX_WIDTH);
        let inner_width = width.saturating_sub(2 + 2 * H_PADDING);
        let content_height = if self.display.is_waiting() {
            1
        } else {
            let quote = format!("❝ {}", self.display.current_quote().text);
            // Word wrap can spill one row past the char estimate.
            wrapped_height(&quote, inner_width) + 1 + 2
        };
        let height = content_height + 2 + 2 * V_PADDING;
        centered_rect_by_size(body, width, height)
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(QUOTE_BOX_BG))
            .padding(Padding::new(H_PADDING, H_PADDING, V_PADDING, V_PADDING))
            .style(Style::default().bg(QUOTE_BOX_BG).fg(QUOTE_BOX_IDLE_TEXT));

        // Loading and failed fetches both show an empty card.
        if self.display.is_waiting() {
            return Paragraph::new(Line::from("")).block(block);
        }

        let accent = Style::default().fg(self.display.current_color().into());
        let quote = self.display.current_quote();
        let lines = vec![
            Line::from(vec![
                Span::styled("❝ ", accent.add_modifier(Modifier::BOLD)),
                Span::styled(quote.text.clone(), accent.add_modifier(Modifier::BOLD)),
            ])
            .alignment(Alignment::Center),
            Line::from(""),
            Line::from(Span::styled(format!("- {}", quote.author), accent))
                .alignment(Alignment::Right),
        ];

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
    }
}
