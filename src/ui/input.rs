use crate::share::ShareTarget;
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.show_popup() {
        match key.code {
            KeyCode::Esc | KeyCode::Char('s') => app.close_popup(),
            KeyCode::Char('1') => app.copy_share_link(ShareTarget::Tweet),
            KeyCode::Char('2') => app.copy_share_link(ShareTarget::Tumblr),
            KeyCode::Char('q') => app.request_quit(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('n') | KeyCode::Char(' ') | KeyCode::Enter => app.next_quote(),
        KeyCode::Char('s') => {
            app.toggle_share_popup();
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
