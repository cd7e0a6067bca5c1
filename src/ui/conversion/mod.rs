mod intent;
mod reducer;
mod state;

pub use intent::ConversionIntent;
pub use reducer::ConversionReducer;
pub use state::{ConversionState, StateError};
