use crate::share::{ShareLinks, ShareTarget};
use crate::ui::app::{App, CopyStatus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions, wrapped_height};
use crate::ui::quote_box::QuoteBox;
use crate::ui::theme::{HEADER_TEXT, POPUP_BORDER, STATUS_ERROR, STATUS_OK};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let accent: Color = app.display().current_color().into();

    frame.render_widget(Header::new().widget(app.display()), header);

    frame.render_widget(Clear, body);
    frame.render_widget(Block::default().style(Style::default().bg(accent)), body);
    let quote_box = QuoteBox::new(app.display());
    let box_area = quote_box.area(body);
    if box_area.width > 0 && box_area.height > 0 {
        frame.render_widget(quote_box.widget(), box_area);
    }

    frame.render_widget(Footer::new().widget(footer, app.show_popup()), footer);

    if app.show_popup() {
        if let Some(links) = app.share_links() {
            draw_share_popup(frame, body, &links, app.share_status(), accent);
        }
    }
}

fn draw_share_popup(
    frame: &mut Frame<'_>,
    body: Rect,
    links: &ShareLinks,
    status: Option<&CopyStatus>,
    accent: Color,
) {
    let popup_width = (body.width * 4 / 5).max(20).min(body.width);
    let inner_width = popup_width.saturating_sub(2);

    let label_style = Style::default().fg(accent).add_modifier(Modifier::BOLD);
    let url_style = Style::default().fg(HEADER_TEXT);
    let mut lines: Vec<Line> = Vec::new();
    let mut rows: u16 = 0;

    for (idx, target) in [ShareTarget::Tweet, ShareTarget::Tumblr].iter().enumerate() {
        if idx > 0 {
            lines.push(Line::from(""));
            rows += 1;
        }
        lines.push(Line::from(Span::styled(
            format!("{}. {}", idx + 1, target.label()),
            label_style,
        )));
        let url = links.get(*target).to_string();
        rows += 1 + wrapped_height(&url, inner_width);
        lines.push(Line::from(Span::styled(url, url_style)));
    }

    if let Some(status) = status {
        let (text, color) = match status {
            CopyStatus::Copied(target) => (format!("{} link copied", target.label()), STATUS_OK),
            CopyStatus::Failed(err) => (err.clone(), STATUS_ERROR),
        };
        lines.push(Line::from(""));
        rows += 1 + wrapped_height(&text, inner_width);
        lines.push(Line::from(Span::styled(text, Style::default().fg(color))));
    }

    let area = centered_rect_by_size(body, popup_width, rows.saturating_add(2));
    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled("Share", label_style))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    // URLs carry no spaces, so wrap by character with trim off.
    let widget = Paragraph::new(lines)
        .block(popup)
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}
