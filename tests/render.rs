//! Rendering against ratatui's in-memory backend.

mod common;

use common::*;
use quotebox::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

fn render(app: &quotebox::ui::app::App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn loading_shows_empty_box_and_hints() {
    let app = make_app();
    let text = buffer_text(&render(&app, 100, 30));
    assert!(text.contains("Loading"));
    assert!(text.contains("New quote"));
    assert!(!text.contains("- "));
}

#[test]
fn failed_fetch_renders_like_loading() {
    let loading = make_app();
    let mut failed = make_app();
    failed.on_quotes_settled(Vec::new());

    assert_eq!(
        buffer_text(&render(&loading, 100, 30)),
        buffer_text(&render(&failed, 100, 30))
    );
}

#[test]
fn populated_shows_quote_and_author() {
    let mut app = make_app();
    app.on_quotes_settled(quotes(&[("Stay hungry", "Steve")]));

    let text = buffer_text(&render(&app, 100, 30));
    assert!(text.contains("Stay hungry"));
    assert!(text.contains("- Steve"));
    assert!(text.contains("1 quotes"));
}

#[test]
fn share_popup_lists_both_targets() {
    let mut app = make_app();
    app.on_quotes_settled(quotes(&[("Hi", "Bo")]));
    app.toggle_share_popup();

    let text = buffer_text(&render(&app, 120, 40));
    assert!(text.contains("1. Tweet"));
    assert!(text.contains("2. Tumblr"));
    assert!(text.contains("Copy tweet link"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let mut app = make_app();
    app.on_quotes_settled(quotes(&[("A long quote that will need wrapping", "Someone")]));
    app.toggle_share_popup();
    let _ = render(&app, 12, 5);
    let _ = render(&app, 1, 1);
}
