//! User settings for PocketFin
//!
//! Manages user preferences: display currency and date format.

use serde::{Deserialize, Serialize};

use super::paths::PocketFinPaths;
use crate::error::PocketFinError;
use crate::storage::file_io::{read_json, write_json_atomic};

/// Display currency preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Jpy,
    Cad,
}

impl Currency {
    /// The symbol shown before amounts
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Jpy => "¥",
            Self::Cad => "C$",
        }
    }

    /// Parse a currency code from user input (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "USD" => Some(Self::Usd),
            "EUR" => Some(Self::Eur),
            "GBP" => Some(Self::Gbp),
            "JPY" => Some(Self::Jpy),
            "CAD" => Some(Self::Cad),
            _ => None,
        }
    }

    /// The ISO-style code for display
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
            Self::Cad => "CAD",
        }
    }
}

/// User settings for PocketFin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Display currency
    #[serde(default)]
    pub currency: Currency,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency: Currency::default(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating defaults if the file doesn't exist
    pub fn load_or_create(paths: &PocketFinPaths) -> Result<Self, PocketFinError> {
        paths.ensure_directories()?;

        let settings_file = paths.settings_file();
        if settings_file.exists() {
            read_json(&settings_file)
        } else {
            let settings = Self::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PocketFinPaths) -> Result<(), PocketFinError> {
        write_json_atomic(paths.settings_file(), self)
    }
}
