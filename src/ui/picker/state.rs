use crate::ui::mvi::UiState;

/// What a picker selection applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKind {
    Category,
    InputUnit,
    OutputUnit,
}

impl PickerKind {
    pub fn title(self) -> &'static str {
        match self {
            PickerKind::Category => "Select Conversion Category",
            PickerKind::InputUnit => "Select Input Unit",
            PickerKind::OutputUnit => "Select Output Unit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PickerState {
    #[default]
    Hidden,
    Visible {
        kind: PickerKind,
        items: Vec<&'static str>,
        /// Highlighted row, always a valid index into `items` when non-empty.
        selected: usize,
    },
}

impl UiState for PickerState {}

impl PickerState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn kind(&self) -> Option<PickerKind> {
        match self {
            Self::Visible { kind, .. } => Some(*kind),
            Self::Hidden => None,
        }
    }

    /// The highlighted entry together with what it applies to.
    pub fn selection(&self) -> Option<(PickerKind, &'static str)> {
        match self {
            Self::Visible {
                kind,
                items,
                selected,
            } => items.get(*selected).map(|item| (*kind, *item)),
            Self::Hidden => None,
        }
    }
}
