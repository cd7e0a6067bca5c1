mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_picker_dialog;
pub use intent::PickerIntent;
pub use reducer::PickerReducer;
pub use state::{PickerKind, PickerState};
