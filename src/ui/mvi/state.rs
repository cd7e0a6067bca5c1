/// Marker trait for UI state objects.
///
/// A state holds everything the view needs to draw itself, so two equal states
/// always render the same frame.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
