use std::sync::Arc;
use thiserror::Error;

use crate::catalog::{Catalog, Category, UnitOption};
use crate::config::Defaults;
use crate::convert::{convert_text, DEFAULT_FRACTION_DIGITS};
use crate::ui::mvi::UiState;

/// A selection that does not come from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("Category '{name}' not found")]
    UnknownCategory { name: String },

    #[error("Unit '{unit}' not found in category '{category}'")]
    UnknownUnit { unit: String, category: String },
}

/// Session state of the converter screen.
///
/// Every update recomputes `output_text` before returning, except when the
/// input text does not parse as a number: then the previous output stays.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionState {
    catalog: Arc<Catalog>,
    selected_category: &'static str,
    input_unit: UnitOption,
    output_unit: UnitOption,
    input_text: String,
    output_text: String,
    fraction_digits: usize,
}

impl UiState for ConversionState {}

impl Default for ConversionState {
    fn default() -> Self {
        Self::new(Arc::new(Catalog::standard()))
    }
}

impl ConversionState {
    /// First category selected, both units on its first entry, empty texts.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let category = catalog.first_category();
        let selected_category = category.name;
        let unit = category.first_unit();
        Self {
            catalog,
            selected_category,
            input_unit: unit,
            output_unit: unit,
            input_text: String::new(),
            output_text: String::new(),
            fraction_digits: DEFAULT_FRACTION_DIGITS,
        }
    }

    /// Starting state honoring configured defaults.
    pub fn configured(
        catalog: Arc<Catalog>,
        defaults: &Defaults,
        fraction_digits: usize,
    ) -> Result<Self, StateError> {
        let mut state = Self::new(catalog).with_fraction_digits(fraction_digits);
        if let Some(category) = &defaults.category {
            state.set_category(category)?;
        }
        if let Some(name) = &defaults.input_unit {
            let unit = state.unit_by_name(name)?;
            state.set_input_unit(unit)?;
        }
        if let Some(name) = &defaults.output_unit {
            let unit = state.unit_by_name(name)?;
            state.set_output_unit(unit)?;
        }
        Ok(state)
    }

    pub fn with_fraction_digits(mut self, fraction_digits: usize) -> Self {
        self.fraction_digits = fraction_digits;
        self.recompute();
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selected_category(&self) -> &'static str {
        self.selected_category
    }

    pub fn input_unit(&self) -> UnitOption {
        self.input_unit
    }

    pub fn output_unit(&self) -> UnitOption {
        self.output_unit
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn output_text(&self) -> &str {
        &self.output_text
    }

    /// Units of the selected category, in display order.
    pub fn units(&self) -> &[UnitOption] {
        &self.current_category().units
    }

    pub fn category_names(&self) -> Vec<&'static str> {
        self.catalog.category_names()
    }

    pub fn set_category(&mut self, name: &str) -> Result<(), StateError> {
        let category = self
            .catalog
            .category(name)
            .ok_or_else(|| StateError::UnknownCategory {
                name: name.to_string(),
            })?;
        self.selected_category = category.name;
        self.input_unit = category.first_unit();
        self.output_unit = category.first_unit();
        tracing::debug!(category = name, "Category selected");
        self.recompute();
        Ok(())
    }

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
        self.recompute();
    }

    pub fn set_input_unit(&mut self, unit: UnitOption) -> Result<(), StateError> {
        self.ensure_member(&unit)?;
        self.input_unit = unit;
        self.recompute();
        Ok(())
    }

    pub fn set_output_unit(&mut self, unit: UnitOption) -> Result<(), StateError> {
        self.ensure_member(&unit)?;
        self.output_unit = unit;
        self.recompute();
        Ok(())
    }

    /// Look up a unit of the selected category by name.
    pub fn unit_by_name(&self, name: &str) -> Result<UnitOption, StateError> {
        self.current_category()
            .unit(name)
            .ok_or_else(|| self.unknown_unit(name))
    }

    fn current_category(&self) -> &Category {
        // selected_category is only ever assigned from a catalog entry
        self.catalog
            .category(self.selected_category)
            .unwrap_or_else(|| self.catalog.first_category())
    }

    fn ensure_member(&self, unit: &UnitOption) -> Result<(), StateError> {
        if self.current_category().contains(unit) {
            Ok(())
        } else {
            Err(self.unknown_unit(unit.name))
        }
    }

    fn unknown_unit(&self, name: &str) -> StateError {
        StateError::UnknownUnit {
            unit: name.to_string(),
            category: self.selected_category.to_string(),
        }
    }

    fn recompute(&mut self) {
        match convert_text(
            self.selected_category,
            &self.input_text,
            &self.input_unit,
            &self.output_unit,
            self.fraction_digits,
        ) {
            Some(output) => self.output_text = output,
            None => {
                tracing::trace!(input = %self.input_text, "Input not numeric, output kept")
            }
        }
    }
}
