/// Marker trait for actions fed to a reducer (selection changes, edits).
pub trait Intent: Send + 'static {}
