use crate::catalog::UnitOption;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ConversionIntent {
    /// Switch category; both units reset to its first entry.
    SelectCategory { category: String },
    /// Replace the raw input text. Non-numeric text keeps the previous output.
    EditInput { text: String },
    SelectInputUnit { unit: UnitOption },
    SelectOutputUnit { unit: UnitOption },
}

impl Intent for ConversionIntent {}
