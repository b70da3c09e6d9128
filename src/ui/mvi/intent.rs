/// Marker for events a reducer consumes: settled fetches, user selections.
pub trait Intent: Send + 'static {}
