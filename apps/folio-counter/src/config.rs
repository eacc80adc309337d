//! # Application Configuration
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--opening-cash`, `--strict`, `--json`, `--store-name`)
//! 2. Environment variables (`FOLIO_*`)
//! 3. Defaults (this file, and `LedgerConfig::default()` in folio-core)
//!
//! Configuration is read once at startup and never changes afterwards.

use std::env;

use serde::{Deserialize, Serialize};

use folio_core::validation::validate_discount_bps;
use folio_core::{IntakePolicy, LedgerConfig, Money};

use crate::args::Args;

/// How reports are written to the console.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Shown in the welcome banner.
    pub store_name: String,

    pub ledger: LedgerConfig,

    pub output: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            store_name: "Folio Books & Magazines".to_string(),
            ledger: LedgerConfig::default(),
            output: OutputFormat::Text,
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// ## Environment Variables
    /// - `FOLIO_STORE_NAME`: store name for the banner
    /// - `FOLIO_OPENING_CASH`: opening register cash, e.g. `1000` or `250.50`
    /// - `FOLIO_LOYALTY_DISCOUNT`: loyalty discount percentage, e.g. `10`
    /// - `FOLIO_STRICT_INTAKE`: `true` to reject negative prices and empty titles
    /// - `FOLIO_OUTPUT`: `text` or `json`
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::load`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(name) = lookup("FOLIO_STORE_NAME") {
            config.store_name = name;
        }

        if let Some(cash) = lookup("FOLIO_OPENING_CASH") {
            config.ledger.opening_cash = cash
                .parse::<Money>()
                .map_err(|_| ConfigError::InvalidValue("FOLIO_OPENING_CASH".to_string()))?;
        }

        if let Some(pct) = lookup("FOLIO_LOYALTY_DISCOUNT") {
            config.ledger.loyalty_discount_bps = parse_percentage(&pct)
                .ok_or_else(|| ConfigError::InvalidValue("FOLIO_LOYALTY_DISCOUNT".to_string()))?;
        }

        if let Some(strict) = lookup("FOLIO_STRICT_INTAKE") {
            let strict: bool = strict
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("FOLIO_STRICT_INTAKE".to_string()))?;
            if strict {
                config.ledger.intake_policy = IntakePolicy::Strict;
            }
        }

        if let Some(output) = lookup("FOLIO_OUTPUT") {
            config.output = match output.trim().to_ascii_lowercase().as_str() {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                _ => return Err(ConfigError::InvalidValue("FOLIO_OUTPUT".to_string())),
            };
        }

        Ok(config)
    }

    /// Applies command-line overrides on top of the loaded values.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(name) = &args.store_name {
            self.store_name = name.clone();
        }
        if let Some(cash) = args.opening_cash {
            self.ledger.opening_cash = cash;
        }
        if args.strict {
            self.ledger.intake_policy = IntakePolicy::Strict;
        }
        if args.json {
            self.output = OutputFormat::Json;
        }
    }
}

/// Converts a percentage such as `10` or `12.5` into basis points.
fn parse_percentage(raw: &str) -> Option<u32> {
    let pct: f64 = raw.trim().parse().ok()?;
    if !pct.is_finite() || pct < 0.0 {
        return None;
    }
    let bps = (pct * 100.0).round() as u32;
    validate_discount_bps(bps).ok()?;
    Some(bps)
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.ledger.opening_cash.cents(), 100_000);
        assert_eq!(config.ledger.loyalty_discount_bps, 1000);
        assert_eq!(config.ledger.intake_policy, IntakePolicy::Permissive);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_environment_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("FOLIO_STORE_NAME", "Corner Books"),
            ("FOLIO_OPENING_CASH", "250.50"),
            ("FOLIO_LOYALTY_DISCOUNT", "12.5"),
            ("FOLIO_STRICT_INTAKE", "true"),
            ("FOLIO_OUTPUT", "JSON"),
        ]))
        .unwrap();

        assert_eq!(config.store_name, "Corner Books");
        assert_eq!(config.ledger.opening_cash.cents(), 25_050);
        assert_eq!(config.ledger.loyalty_discount_bps, 1250);
        assert_eq!(config.ledger.intake_policy, IntakePolicy::Strict);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_values_name_the_variable() {
        let err = AppConfig::from_lookup(lookup_from(&[("FOLIO_OPENING_CASH", "lots")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for FOLIO_OPENING_CASH");

        assert!(AppConfig::from_lookup(lookup_from(&[("FOLIO_LOYALTY_DISCOUNT", "150")])).is_err());
        assert!(AppConfig::from_lookup(lookup_from(&[("FOLIO_LOYALTY_DISCOUNT", "-5")])).is_err());
        assert!(AppConfig::from_lookup(lookup_from(&[("FOLIO_STRICT_INTAKE", "maybe")])).is_err());
        assert!(AppConfig::from_lookup(lookup_from(&[("FOLIO_OUTPUT", "xml")])).is_err());
    }

    #[test]
    fn test_args_override_environment() {
        let mut config =
            AppConfig::from_lookup(lookup_from(&[("FOLIO_OPENING_CASH", "10")])).unwrap();
        let args = Args {
            opening_cash: Some(Money::from_cents(500)),
            strict: true,
            json: true,
            store_name: Some("Night Shift".to_string()),
        };
        config.apply_args(&args);

        assert_eq!(config.ledger.opening_cash.cents(), 500);
        assert_eq!(config.ledger.intake_policy, IntakePolicy::Strict);
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.store_name, "Night Shift");
    }
}
