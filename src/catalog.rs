//! Compiled-in unit table.
//!
//! Every category maps to an ordered list of units. For linear categories the
//! unit factor is the ratio to the category's base unit (factor 1.0).
//! Temperature and Fuel Efficiency carry placeholder factors and are converted
//! through dedicated formulas instead.

use serde::Serialize;

pub const TEMPERATURE: &str = "Temperature";
pub const FUEL_EFFICIENCY: &str = "Fuel Efficiency";

const CELSIUS: &str = "Celsius";
const FAHRENHEIT: &str = "Fahrenheit";
const KELVIN: &str = "Kelvin";
const KM_PER_LITER: &str = "Kilometers per Liter";
const MILES_PER_GALLON: &str = "Miles per Gallon";

/// Miles per gallon in one kilometer per liter.
const MPG_PER_KM_PER_LITER: f64 = 2.35215;

/// One unit within a category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitOption {
    pub name: &'static str,
    pub factor: f64,
}

impl UnitOption {
    pub const fn new(name: &'static str, factor: f64) -> Self {
        Self { name, factor }
    }
}

/// How values in a category are converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionRule {
    /// `value * from.factor / to.factor`
    Linear,
    Temperature,
    FuelEfficiency,
}

impl ConversionRule {
    pub fn for_category(name: &str) -> Self {
        match name {
            TEMPERATURE => Self::Temperature,
            FUEL_EFFICIENCY => Self::FuelEfficiency,
            _ => Self::Linear,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub name: &'static str,
    pub rule: ConversionRule,
    pub units: Vec<UnitOption>,
}

impl Category {
    fn new(name: &'static str, units: Vec<UnitOption>) -> Self {
        Self {
            name,
            rule: ConversionRule::for_category(name),
            units,
        }
    }

    /// Default selection for both input and output.
    pub fn first_unit(&self) -> UnitOption {
        self.units[0]
    }

    pub fn unit(&self, name: &str) -> Option<UnitOption> {
        self.units.iter().copied().find(|unit| unit.name == name)
    }

    pub fn contains(&self, unit: &UnitOption) -> bool {
        self.units.iter().any(|candidate| candidate == unit)
    }

    pub fn unit_names(&self) -> Vec<&'static str> {
        self.units.iter().map(|unit| unit.name).collect()
    }
}

/// Ordered, immutable set of categories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// The nine built-in categories in display order.
    pub fn standard() -> Self {
        Self {
            categories: vec![
                Category::new(
                    "Length/Distance",
                    vec![
                        UnitOption::new("Centimeter", 0.01),
                        UnitOption::new("Meter", 1.0),
                        UnitOption::new("Kilometer", 1000.0),
                        UnitOption::new("Inch", 0.0254),
                        UnitOption::new("Foot", 0.3048),
                        UnitOption::new("Yard", 0.9144),
                        UnitOption::new("Mile", 1609.34),
                    ],
                ),
                Category::new(
                    "Weight/Mass",
                    vec![
                        UnitOption::new("Gram", 0.001),
                        UnitOption::new("Kilogram", 1.0),
                        UnitOption::new("Pound", 0.453592),
                        UnitOption::new("Ounce", 0.0283495),
                        UnitOption::new("Ton", 907.184),
                    ],
                ),
                Category::new(
                    "Volume/Capacity",
                    vec![
                        UnitOption::new("Milliliter", 0.001),
                        UnitOption::new("Liter", 1.0),
                        UnitOption::new("Cubic Meter", 1000.0),
                        UnitOption::new("Cubic Inch", 0.0163871),
                        UnitOption::new("Cubic Foot", 28.3168),
                        UnitOption::new("Gallon", 3.78541),
                    ],
                ),
                Category::new(
                    TEMPERATURE,
                    vec![
                        UnitOption::new(CELSIUS, 1.0),
                        UnitOption::new(FAHRENHEIT, 1.0),
                        UnitOption::new(KELVIN, 1.0),
                    ],
                ),
                Category::new(
                    "Time",
                    vec![
                        UnitOption::new("Second", 1.0),
                        UnitOption::new("Minute", 60.0),
                        UnitOption::new("Hour", 3600.0),
                        UnitOption::new("Day", 86400.0),
                        UnitOption::new("Week", 604800.0),
                    ],
                ),
                Category::new(
                    "Speed",
                    vec![
                        UnitOption::new("Meters per Second", 1.0),
                        UnitOption::new("Kilometers per Hour", 0.277778),
                        UnitOption::new("Miles per Hour", 0.44704),
                        UnitOption::new("Feet per Second", 0.3048),
                    ],
                ),
                Category::new(
                    "Area",
                    vec![
                        UnitOption::new("Square Meter", 1.0),
                        UnitOption::new("Square Kilometer", 1_000_000.0),
                        UnitOption::new("Square Foot", 0.092903),
                        UnitOption::new("Square Yard", 0.836127),
                        UnitOption::new("Acre", 4046.86),
                        UnitOption::new("Hectare", 10_000.0),
                    ],
                ),
                Category::new(
                    "Energy",
                    vec![
                        UnitOption::new("Joule", 1.0),
                        UnitOption::new("Kilojoule", 1000.0),
                        UnitOption::new("Calorie", 4.184),
                        UnitOption::new("Kilocalorie", 4184.0),
                        UnitOption::new("Watt-hour", 3600.0),
                        UnitOption::new("Kilowatt-hour", 3_600_000.0),
                    ],
                ),
                Category::new(
                    FUEL_EFFICIENCY,
                    vec![
                        UnitOption::new(KM_PER_LITER, 1.0),
                        UnitOption::new(MILES_PER_GALLON, 0.425144),
                    ],
                ),
            ],
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.name == name)
    }

    pub fn category_names(&self) -> Vec<&'static str> {
        self.categories.iter().map(|category| category.name).collect()
    }

    pub fn first_category(&self) -> &Category {
        &self.categories[0]
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Affine temperature conversion between Celsius, Fahrenheit and Kelvin.
///
/// Any pair not listed (same unit, unknown name) returns `value` unchanged.
pub fn convert_temperature(value: f64, from: &str, to: &str) -> f64 {
    match (from, to) {
        (CELSIUS, FAHRENHEIT) => value * 9.0 / 5.0 + 32.0,
        (FAHRENHEIT, CELSIUS) => (value - 32.0) * 5.0 / 9.0,
        (CELSIUS, KELVIN) => value + 273.15,
        (KELVIN, CELSIUS) => value - 273.15,
        (FAHRENHEIT, KELVIN) => (value - 32.0) * 5.0 / 9.0 + 273.15,
        (KELVIN, FAHRENHEIT) => (value - 273.15) * 9.0 / 5.0 + 32.0,
        _ => value,
    }
}

/// Kilometers per liter <-> miles per gallon. Other pairs are identity.
pub fn convert_fuel_efficiency(value: f64, from: &str, to: &str) -> f64 {
    match (from, to) {
        (KM_PER_LITER, MILES_PER_GALLON) => value * MPG_PER_KM_PER_LITER,
        (MILES_PER_GALLON, KM_PER_LITER) => value / MPG_PER_KM_PER_LITER,
        _ => value,
    }
}
