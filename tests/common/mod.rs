//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_source;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use quotebox::config::{SourceConfig, ThemeConfig};
use quotebox::quotes::{QuoteCollection, QuoteRecord};
use quotebox::ui::app::App;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

pub type CopiedLinks = Arc<Mutex<Vec<String>>>;

pub fn quotes(pairs: &[(&str, &str)]) -> QuoteCollection {
    pairs
        .iter()
        .map(|(text, author)| QuoteRecord::new(*text, *author))
        .collect()
}

pub fn source(url: &str) -> SourceConfig {
    SourceConfig {
        url: url.to_string(),
        request_timeout_seconds: None,
    }
}

/// Write `content` to `config.toml` in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- App helpers --------------------------------------------------------------

pub fn make_app() -> App {
    make_app_with_theme(&ThemeConfig::default())
}

pub fn make_app_with_theme(theme: &ThemeConfig) -> App {
    App::with_rng(theme, StdRng::seed_from_u64(0x5eed))
}

/// App with a clipboard that records copies instead of touching the system.
pub fn make_app_with_spy_clipboard() -> (App, CopiedLinks) {
    let mut app = make_app();
    let copied: CopiedLinks = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&copied);
    app.set_clipboard(Box::new(move |text: &str| {
        sink.lock().unwrap().push(text.to_string());
        Ok(())
    }));
    (app, copied)
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}
