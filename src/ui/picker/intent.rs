use crate::ui::mvi::Intent;
use crate::ui::picker::state::PickerKind;

#[derive(Debug, Clone)]
pub enum PickerIntent {
    /// Show the picker with `current` highlighted (clamped to the item count).
    Open {
        kind: PickerKind,
        items: Vec<&'static str>,
        current: usize,
    },
    Close,
    MoveUp,
    MoveDown,
    /// Highlight a row directly; out-of-range indices are ignored.
    Jump { index: usize },
}

impl Intent for PickerIntent {}
