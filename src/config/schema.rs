// Kinboard - search/filter and export core for the association dashboard
// Copyright (c) 2026 Kinboard Contributors
// Licensed under the MIT License

//! Configuration schema types

use crate::domain::{KinboardError, Result};
use serde::{Deserialize, Serialize};

/// Main Kinboard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KinboardConfig {
    /// Organization name shown in document headers, footers and the
    /// calendar PRODID
    #[serde(default = "default_organization")]
    pub organization: String,

    /// Calendar feed settings
    #[serde(default)]
    pub calendar: CalendarSettings,

    /// Spreadsheet export settings
    #[serde(default)]
    pub spreadsheet: SpreadsheetSettings,

    /// Document export settings
    #[serde(default)]
    pub document: DocumentSettings,

    /// Search behavior settings
    #[serde(default)]
    pub search: SearchSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for KinboardConfig {
    fn default() -> Self {
        Self {
            organization: default_organization(),
            calendar: CalendarSettings::default(),
            spreadsheet: SpreadsheetSettings::default(),
            document: DocumentSettings::default(),
            search: SearchSettings::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl KinboardConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.organization.trim().is_empty() {
            return Err(KinboardError::Configuration(
                "organization must not be empty".to_string(),
            ));
        }
        if self.calendar.domain.trim().is_empty() {
            return Err(KinboardError::Configuration(
                "calendar.domain must not be empty".to_string(),
            ));
        }
        if self.spreadsheet.min_column_width <= 0.0 {
            return Err(KinboardError::Configuration(
                "spreadsheet.min_column_width must be positive".to_string(),
            ));
        }
        if self.search.debounce_ms == 0 {
            return Err(KinboardError::Configuration(
                "search.debounce_ms must be positive".to_string(),
            ));
        }
        self.logging.validate()
    }
}

/// Calendar feed settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarSettings {
    /// Domain part of event UIDs (`{id}@{domain}`)
    #[serde(default = "default_calendar_domain")]
    pub domain: String,

    /// Product part of the PRODID line
    #[serde(default = "default_calendar_product")]
    pub product: String,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            domain: default_calendar_domain(),
            product: default_calendar_product(),
        }
    }
}

/// Spreadsheet export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpreadsheetSettings {
    /// Minimum column width in characters
    #[serde(default = "default_min_column_width")]
    pub min_column_width: f64,
}

impl Default for SpreadsheetSettings {
    fn default() -> Self {
        Self {
            min_column_width: default_min_column_width(),
        }
    }
}

/// Document export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSettings {
    /// Note printed next to the organization name in page footers
    #[serde(default = "default_footer_note")]
    pub footer_note: String,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            footer_note: default_footer_note(),
        }
    }
}

/// Search behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Quiet period before a search recomputation fires, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Whether file logging is enabled
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Rotation policy: "daily" or "hourly"
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

impl LoggingConfig {
    /// Validate the logging configuration.
    pub fn validate(&self) -> Result<()> {
        match self.local_rotation.as_str() {
            "daily" | "hourly" => Ok(()),
            other => Err(KinboardError::Configuration(format!(
                "Invalid log rotation: {other}. Must be 'daily' or 'hourly'"
            ))),
        }
    }
}

fn default_organization() -> String {
    "Kinboard".to_string()
}

fn default_calendar_domain() -> String {
    "kinboard.org".to_string()
}

fn default_calendar_product() -> String {
    "Association Calendar".to_string()
}

fn default_min_column_width() -> f64 {
    15.0
}

fn default_footer_note() -> String {
    "Automatically generated report".to_string()
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = KinboardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(config.spreadsheet.min_column_width, 15.0);
    }

    #[test]
    fn test_empty_organization_is_rejected() {
        let config = KinboardConfig {
            organization: "  ".to_string(),
            ..KinboardConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(KinboardError::Configuration(_))
        ));
    }

    #[test]
    fn test_invalid_rotation_is_rejected() {
        let config = KinboardConfig {
            logging: LoggingConfig {
                local_rotation: "weekly".to_string(),
                ..LoggingConfig::default()
            },
            ..KinboardConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("weekly"));
    }

    #[test]
    fn test_zero_debounce_is_rejected() {
        let config = KinboardConfig {
            search: SearchSettings { debounce_ms: 0 },
            ..KinboardConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: KinboardConfig = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(config.organization, "Kinboard");
        assert_eq!(config.calendar.domain, "kinboard.org");

        let config: KinboardConfig =
            serde_json::from_str(r#"{"organization": "Moukona Ghieme"}"#).unwrap();
        assert_eq!(config.organization, "Moukona Ghieme");
        assert_eq!(config.search.debounce_ms, 300);
    }
}
