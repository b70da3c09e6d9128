use crate::clipboard::{system_clipboard, ClipboardWriter};
use crate::config::ThemeConfig;
use crate::quotes::{select, Palette, QuoteCollection};
use crate::share::{ShareLinks, ShareTarget};
use crate::ui::display::{DisplayIntent, DisplayReducer, DisplayState};
use crate::ui::mvi::Reducer;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Result of the last share-link copy.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CopyStatus {
    Copied(ShareTarget),
    Failed(String),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    QuoteBox,
    SharePopup,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    /// Quote/color/loading state (MVI pattern).
    display: DisplayState,
    palette: Palette,
    rng: StdRng,
    clipboard: ClipboardWriter,
    /// Outcome of the last copy, shown in the share popup.
    share_status: Option<CopyStatus>,
}

impl App {
    pub fn new(theme: &ThemeConfig) -> Self {
        Self::with_rng(theme, StdRng::from_entropy())
    }

    /// Build with a fixed RNG so selections are reproducible.
    pub fn with_rng(theme: &ThemeConfig, rng: StdRng) -> Self {
        Self {
            should_quit: false,
            focus: Focus::QuoteBox,
            display: DisplayState::new(theme.initial_color),
            palette: theme.palette(),
            rng,
            clipboard: system_clipboard(),
            share_status: None,
        }
    }

    pub fn set_clipboard(&mut self, clipboard: ClipboardWriter) {
        self.clipboard = clipboard;
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn show_popup(&self) -> bool {
        self.focus == Focus::SharePopup
    }

    pub fn dispatch_display(&mut self, intent: DisplayIntent) {
        dispatch_mvi!(self, display, DisplayReducer, intent);
    }

    /// Fetch settled. Runs the first selection when quotes arrived.
    pub fn on_quotes_settled(&mut self, quotes: QuoteCollection) {
        if !self.display.is_loading() {
            tracing::warn!("Ignoring second quote settlement");
            return;
        }
        self.dispatch_display(DisplayIntent::QuotesSettled { quotes });
        if self.display.is_populated() {
            self.next_quote();
        }
    }

    /// Pick a new random quote and a different accent color.
    /// No-op until quotes have been loaded.
    pub fn next_quote(&mut self) {
        let Some(selection) = select(
            self.display.quotes(),
            &self.palette,
            self.display.current_color(),
            &mut self.rng,
        ) else {
            return;
        };
        tracing::debug!(
            index = selection.quote_index,
            color = %selection.color,
            "Selected quote"
        );
        self.dispatch_display(DisplayIntent::Select(selection));
    }

    /// Share links for the quote on screen, once there is one.
    pub fn share_links(&self) -> Option<ShareLinks> {
        self.display
            .is_populated()
            .then(|| ShareLinks::for_quote(self.display.current_quote()))
    }

    /// Returns true when the popup is now open.
    pub fn toggle_share_popup(&mut self) -> bool {
        self.focus = match self.focus {
            Focus::SharePopup => Focus::QuoteBox,
            Focus::QuoteBox if self.display.is_populated() => {
                self.share_status = None;
                Focus::SharePopup
            }
            Focus::QuoteBox => Focus::QuoteBox,
        };
        self.show_popup()
    }

    pub fn close_popup(&mut self) {
        self.focus = Focus::QuoteBox;
    }

    pub fn share_status(&self) -> Option<&CopyStatus> {
        self.share_status.as_ref()
    }

    pub fn copy_share_link(&mut self, target: ShareTarget) {
        let Some(links) = self.share_links() else {
            return;
        };
        let status = match (self.clipboard)(links.get(target)) {
            Ok(()) => CopyStatus::Copied(target),
            Err(err) => {
                tracing::warn!(error = %err, link = target.label(), "Copy failed");
                CopyStatus::Failed(err)
            }
        };
        self.share_status = Some(status);
    }
}
