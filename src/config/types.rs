use serde::{Deserialize, Serialize};

use crate::convert::DEFAULT_FRACTION_DIGITS;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Starting selection for a new session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Category shown at startup (default: first catalog category).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Input unit within `category` (default: the category's first unit).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_unit: Option<String>,
    /// Output unit within `category` (default: the category's first unit).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_unit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Maximum fractional digits in the converted value (default: 10).
    #[serde(default = "default_max_fraction_digits")]
    pub max_fraction_digits: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_max_fraction_digits() -> usize {
    DEFAULT_FRACTION_DIGITS
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_fraction_digits: default_max_fraction_digits(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
