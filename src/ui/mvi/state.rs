/// Marker for renderable state.
///
/// `Default` gives the state before any event arrives; `PartialEq` lets
/// tests assert that an intent left the state untouched.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
