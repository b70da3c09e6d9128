use rand::Rng;

use super::{AccentColor, Palette, QuoteRecord};

/// Outcome of one selector draw: which quote to show and in which color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub quote_index: usize,
    pub color: AccentColor,
}

/// Pick the next quote and accent color.
///
/// The quote index is uniform over `quotes`; the color is drawn
/// independently and differs from `current_color` whenever the palette
/// holds another color. Returns `None` for an empty collection.
pub fn select<R: Rng + ?Sized>(
    quotes: &[QuoteRecord],
    palette: &Palette,
    current_color: AccentColor,
    rng: &mut R,
) -> Option<Selection> {
    if quotes.is_empty() {
        return None;
    }
    let quote_index = rng.gen_range(0..quotes.len());
    let color = palette.pick_other(current_color, rng);
    Some(Selection { quote_index, color })
}
