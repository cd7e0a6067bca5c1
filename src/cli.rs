//! Command line surface: argument definitions and the one-shot commands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::catalog::{Catalog, Category, UnitOption};
use crate::convert::{convert, format_value, parse_input};

#[derive(Debug, Parser)]
#[command(
    name = "unitconv",
    version,
    about = "Convert values between units of length, mass, temperature and more"
)]
pub struct Cli {
    /// Path to the config file (default: <config dir>/unitconv/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Category to open the interactive converter on
    #[arg(long, value_name = "NAME")]
    pub category: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a single value and print the result
    Convert {
        /// Category name, e.g. "Length/Distance"
        #[arg(long, short = 'c')]
        category: String,
        /// Source unit name
        #[arg(long, short = 'f')]
        from: String,
        /// Destination unit name
        #[arg(long, short = 't')]
        to: String,
        /// Value to convert
        #[arg(allow_negative_numbers = true)]
        value: String,
    },
    /// List categories, or the units of one category
    List {
        #[arg(long, short = 'c')]
        category: Option<String>,
        /// Print as JSON, including unit factors
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Category '{name}' not found\nAvailable categories: {}", .available.join(", "))]
    UnknownCategory {
        name: String,
        available: Vec<&'static str>,
    },

    #[error(
        "Unit '{unit}' not found in category '{category}'\nAvailable units: {}",
        .available.join(", ")
    )]
    UnknownUnit {
        unit: String,
        category: String,
        available: Vec<&'static str>,
    },

    #[error("'{value}' is not a number")]
    InvalidNumber { value: String },

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn resolve_category<'a>(catalog: &'a Catalog, name: &str) -> Result<&'a Category, CliError> {
    catalog
        .category(name)
        .ok_or_else(|| CliError::UnknownCategory {
            name: name.to_string(),
            available: catalog.category_names(),
        })
}

pub fn resolve_unit(category: &Category, name: &str) -> Result<UnitOption, CliError> {
    category.unit(name).ok_or_else(|| CliError::UnknownUnit {
        unit: name.to_string(),
        category: category.name.to_string(),
        available: category.unit_names(),
    })
}

/// `convert` subcommand: the formatted result, exactly as the UI shows it.
pub fn run_convert(
    catalog: &Catalog,
    category: &str,
    from: &str,
    to: &str,
    value: &str,
    max_fraction_digits: usize,
) -> Result<String, CliError> {
    let category = resolve_category(catalog, category)?;
    let from = resolve_unit(category, from)?;
    let to = resolve_unit(category, to)?;
    let number = parse_input(value).ok_or_else(|| CliError::InvalidNumber {
        value: value.to_string(),
    })?;

    let converted = convert(category.name, number, &from, &to);
    tracing::debug!(
        category = category.name,
        from = from.name,
        to = to.name,
        number,
        converted,
        "Converted"
    );
    Ok(format_value(converted, max_fraction_digits))
}

/// `list` subcommand output.
pub fn run_list(catalog: &Catalog, category: Option<&str>, json: bool) -> Result<String, CliError> {
    match category {
        Some(name) => {
            let category = resolve_category(catalog, name)?;
            if json {
                Ok(serde_json::to_string_pretty(category)?)
            } else {
                Ok(category.unit_names().join("\n"))
            }
        }
        None if json => Ok(serde_json::to_string_pretty(catalog.categories())?),
        None => {
            let mut lines = Vec::new();
            for category in catalog.categories() {
                lines.push(category.name.to_string());
                lines.extend(category.units.iter().map(|unit| format!("  {}", unit.name)));
            }
            Ok(lines.join("\n"))
        }
    }
}
