use crate::ui::mvi::Reducer;
use crate::ui::picker::intent::PickerIntent;
use crate::ui::picker::state::PickerState;

pub struct PickerReducer;

impl Reducer for PickerReducer {
    type State = PickerState;
    type Intent = PickerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PickerIntent::Open {
                kind,
                items,
                current,
            } => {
                if items.is_empty() {
                    return PickerState::Hidden;
                }
                let selected = current.min(items.len() - 1);
                PickerState::Visible {
                    kind,
                    items,
                    selected,
                }
            }
            PickerIntent::Close => PickerState::Hidden,
            PickerIntent::MoveUp => match state {
                PickerState::Visible {
                    kind,
                    items,
                    selected,
                } => {
                    let selected = if selected == 0 {
                        items.len().saturating_sub(1)
                    } else {
                        selected - 1
                    };
                    PickerState::Visible {
                        kind,
                        items,
                        selected,
                    }
                }
                other => other,
            },
            PickerIntent::MoveDown => match state {
                PickerState::Visible {
                    kind,
                    items,
                    selected,
                } => {
                    let selected = if selected + 1 >= items.len() {
                        0
                    } else {
                        selected + 1
                    };
                    PickerState::Visible {
                        kind,
                        items,
                        selected,
                    }
                }
                other => other,
            },
            PickerIntent::Jump { index } => match state {
                PickerState::Visible {
                    kind,
                    items,
                    selected,
                } => {
                    let selected = if index < items.len() { index } else { selected };
                    PickerState::Visible {
                        kind,
                        items,
                        selected,
                    }
                }
                other => other,
            },
        }
    }
}
