//! System clipboard access for copying share links.

use arboard::Clipboard;

/// Sink for text copied out of the widget. Boxed so tests can swap in a spy.
pub type ClipboardWriter = Box<dyn FnMut(&str) -> Result<(), String>>;

/// Writer backed by the system clipboard.
///
/// The clipboard is opened on first use; headless sessions only fail when
/// the user actually asks to copy.
pub fn system_clipboard() -> ClipboardWriter {
    let mut clipboard: Option<Clipboard> = None;
    Box::new(move |text: &str| {
        if clipboard.is_none() {
            clipboard =
                Some(Clipboard::new().map_err(|e| format!("Clipboard unavailable: {}", e))?);
        }
        match clipboard.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_string())
                .map_err(|e| format!("Failed to set clipboard text: {}", e)),
            None => Err("Clipboard unavailable".to_string()),
        }
    })
}
