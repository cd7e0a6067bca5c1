use crate::catalog::UnitOption;
use crate::ui::conversion::{ConversionIntent, ConversionReducer, ConversionState};
use crate::ui::mvi::Reducer;
use crate::ui::picker::{PickerIntent, PickerKind, PickerReducer, PickerState};

/// Form field that receives keyboard input while no picker is open.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Input,
    InputUnit,
    OutputUnit,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Input => Focus::InputUnit,
            Focus::InputUnit => Focus::OutputUnit,
            Focus::OutputUnit => Focus::Input,
        }
    }

    fn previous(self) -> Self {
        match self {
            Focus::Input => Focus::OutputUnit,
            Focus::InputUnit => Focus::Input,
            Focus::OutputUnit => Focus::InputUnit,
        }
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    /// Converter session state (MVI pattern).
    conversion: ConversionState,
    /// Category/unit picker overlay (MVI pattern).
    picker: PickerState,
}

impl App {
    pub fn new(conversion: ConversionState) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Input,
            conversion,
            picker: PickerState::default(),
        }
    }

    pub fn conversion(&self) -> &ConversionState {
        &self.conversion
    }

    pub fn picker(&self) -> &PickerState {
        &self.picker
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn dispatch(&mut self, intent: ConversionIntent) {
        dispatch_mvi!(self, conversion, ConversionReducer, intent);
    }

    pub fn type_char(&mut self, ch: char) {
        let mut text = self.conversion.input_text().to_string();
        text.push(ch);
        self.dispatch(ConversionIntent::EditInput { text });
    }

    pub fn backspace(&mut self) {
        let mut text = self.conversion.input_text().to_string();
        if text.pop().is_some() {
            self.dispatch(ConversionIntent::EditInput { text });
        }
    }

    pub fn clear_input(&mut self) {
        if !self.conversion.input_text().is_empty() {
            self.dispatch(ConversionIntent::EditInput {
                text: String::new(),
            });
        }
    }

    /// Step the unit under focus by `delta` positions, wrapping around.
    pub fn cycle_focused_unit(&mut self, delta: isize) {
        let current = match self.focus {
            Focus::Input => return,
            Focus::InputUnit => self.conversion.input_unit(),
            Focus::OutputUnit => self.conversion.output_unit(),
        };
        let units = self.conversion.units();
        let len = units.len() as isize;
        let index = units.iter().position(|unit| *unit == current).unwrap_or(0) as isize;
        let unit = units[(index + delta).rem_euclid(len) as usize];
        self.select_unit_for(self.focus, unit);
    }

    pub fn open_category_picker(&mut self) {
        let items = self.conversion.category_names();
        let current = items
            .iter()
            .position(|name| *name == self.conversion.selected_category())
            .unwrap_or(0);
        dispatch_mvi!(
            self,
            picker,
            PickerReducer,
            PickerIntent::Open {
                kind: PickerKind::Category,
                items,
                current,
            }
        );
    }

    /// Open the unit picker for the focused selector. No-op on the input field.
    pub fn open_unit_picker(&mut self) {
        let (kind, current_unit) = match self.focus {
            Focus::Input => return,
            Focus::InputUnit => (PickerKind::InputUnit, self.conversion.input_unit()),
            Focus::OutputUnit => (PickerKind::OutputUnit, self.conversion.output_unit()),
        };
        let units = self.conversion.units();
        let current = units
            .iter()
            .position(|unit| *unit == current_unit)
            .unwrap_or(0);
        let items = units.iter().map(|unit| unit.name).collect();
        dispatch_mvi!(
            self,
            picker,
            PickerReducer,
            PickerIntent::Open {
                kind,
                items,
                current,
            }
        );
    }

    pub fn close_picker(&mut self) {
        dispatch_mvi!(self, picker, PickerReducer, PickerIntent::Close);
    }

    pub fn move_picker_selection(&mut self, delta: i8) {
        let intent = if delta < 0 {
            PickerIntent::MoveUp
        } else {
            PickerIntent::MoveDown
        };
        dispatch_mvi!(self, picker, PickerReducer, intent);
    }

    /// Highlight row `index`. Returns false when the row does not exist.
    pub fn jump_picker_selection(&mut self, index: usize) -> bool {
        dispatch_mvi!(self, picker, PickerReducer, PickerIntent::Jump { index });
        matches!(self.picker, PickerState::Visible { selected, .. } if selected == index)
    }

    /// Apply the highlighted picker entry and close the picker.
    pub fn confirm_picker(&mut self) {
        let Some((kind, name)) = self.picker.selection() else {
            return;
        };
        self.close_picker();
        match kind {
            PickerKind::Category => self.dispatch(ConversionIntent::SelectCategory {
                category: name.to_string(),
            }),
            PickerKind::InputUnit | PickerKind::OutputUnit => {
                let Ok(unit) = self.conversion.unit_by_name(name) else {
                    tracing::warn!(unit = name, "Picked unit vanished from category");
                    return;
                };
                let focus = if kind == PickerKind::InputUnit {
                    Focus::InputUnit
                } else {
                    Focus::OutputUnit
                };
                self.select_unit_for(focus, unit);
            }
        }
    }

    fn select_unit_for(&mut self, focus: Focus, unit: UnitOption) {
        match focus {
            Focus::Input => {}
            Focus::InputUnit => self.dispatch(ConversionIntent::SelectInputUnit { unit }),
            Focus::OutputUnit => self.dispatch(ConversionIntent::SelectOutputUnit { unit }),
        }
    }
}
