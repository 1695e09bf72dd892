//! # Configuration
//!
//! Runtime settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`MOBILEFIXER_*`)
//! 2. Defaults (this file)
//!
//! A malformed value is logged and replaced by its default; startup never
//! fails because of configuration.

use serde::{Deserialize, Serialize};
use tracing::warn;

use mobilefixer_core::forms::FormDefaults;
use mobilefixer_core::Money;

/// Environment variable names.
pub mod env {
    pub const CURRENCY_SYMBOL: &str = "MOBILEFIXER_CURRENCY_SYMBOL";
    pub const CURRENCY_DECIMALS: &str = "MOBILEFIXER_CURRENCY_DECIMALS";
    pub const REORDER_LEVEL: &str = "MOBILEFIXER_REORDER_LEVEL";
    pub const ESTIMATED_DAYS: &str = "MOBILEFIXER_ESTIMATED_DAYS";
    pub const RECENT_LIMIT: &str = "MOBILEFIXER_RECENT_LIMIT";
    pub const SEED_SAMPLE_DATA: &str = "MOBILEFIXER_SEED_SAMPLE_DATA";
    pub const LOG_FILTER: &str = "MOBILEFIXER_LOG_FILTER";
}

/// Money is stored in hundredths, so at most two decimals can be shown.
const MAX_DECIMALS: u8 = 2;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Decimal places shown (0-2)
    pub currency_decimals: u8,

    /// Reorder level used when the inventory form leaves it blank
    pub default_reorder_level: u32,

    /// Repair duration used when the intake form leaves it blank
    pub default_estimated_days: u32,

    /// Rows in the dashboard's recent activity list
    pub recent_activity_limit: usize,

    /// Start with the sample stores, parts and repairs
    pub seed_sample_data: bool,

    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for AppConfig {
    /// ## Default Values
    /// - Currency: ₹ with 2 decimals
    /// - Reorder level: 10
    /// - Estimated repair: 3 days
    /// - Recent activity: 5 repairs
    /// - Sample data: on
    fn default() -> Self {
        let forms = FormDefaults::default();
        AppConfig {
            currency_symbol: "₹".to_string(),
            currency_decimals: MAX_DECIMALS,
            default_reorder_level: forms.reorder_level,
            default_estimated_days: forms.estimated_days,
            recent_activity_limit: 5,
            seed_sample_data: true,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Self {
        AppConfig::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = AppConfig::default();

        if let Some(symbol) = lookup(env::CURRENCY_SYMBOL) {
            config.currency_symbol = symbol;
        }

        config.currency_decimals =
            parse_or_default(&lookup, env::CURRENCY_DECIMALS, config.currency_decimals);
        if config.currency_decimals > MAX_DECIMALS {
            warn!(
                key = env::CURRENCY_DECIMALS,
                value = config.currency_decimals,
                "Too many currency decimals, using {}",
                MAX_DECIMALS
            );
            config.currency_decimals = MAX_DECIMALS;
        }

        config.default_reorder_level =
            parse_or_default(&lookup, env::REORDER_LEVEL, config.default_reorder_level);
        config.default_estimated_days =
            parse_or_default(&lookup, env::ESTIMATED_DAYS, config.default_estimated_days);
        config.recent_activity_limit =
            parse_or_default(&lookup, env::RECENT_LIMIT, config.recent_activity_limit);

        if let Some(raw) = lookup(env::SEED_SAMPLE_DATA) {
            match parse_flag(&raw) {
                Some(flag) => config.seed_sample_data = flag,
                None => warn!(key = env::SEED_SAMPLE_DATA, value = %raw, "Invalid flag, using default"),
            }
        }

        if let Some(filter) = lookup(env::LOG_FILTER) {
            config.log_filter = filter;
        }

        config
    }

    /// Defaults handed to the form parsers.
    pub fn form_defaults(&self) -> FormDefaults {
        FormDefaults {
            reorder_level: self.default_reorder_level,
            estimated_days: self.default_estimated_days,
        }
    }

    /// Formats an amount with the configured symbol, rounding half away
    /// from zero when fewer than two decimals are shown.
    ///
    /// ## Example
    /// ```rust
    /// use mobilefixer_core::Money;
    /// use mobilefixer_store::AppConfig;
    ///
    /// let config = AppConfig::default();
    /// assert_eq!(config.format_currency(Money::from_minor(29999)), "₹299.99");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let decimals = u32::from(self.currency_decimals.min(MAX_DECIMALS));
        let step = 10_i64.pow(u32::from(MAX_DECIMALS) - decimals);
        let shown = amount.minor().saturating_abs().saturating_add(step / 2) / step;

        let divisor = 10_i64.pow(decimals);
        let whole = shown / divisor;
        let frac = shown % divisor;

        format!(
            "{}{}{}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            if decimals > 0 {
                format!("{}.{:0width$}", whole, frac, width = decimals as usize)
            } else {
                whole.to_string()
            }
        )
    }
}

fn parse_or_default<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "Invalid number, using default {}", default);
            default
        }),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.form_defaults(), FormDefaults::default());
        assert_eq!(config.recent_activity_limit, 5);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (env::CURRENCY_SYMBOL, "$"),
            (env::REORDER_LEVEL, "4"),
            (env::ESTIMATED_DAYS, " 7 "),
            (env::SEED_SAMPLE_DATA, "off"),
            (env::LOG_FILTER, "mobilefixer_store=debug"),
        ]));

        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.form_defaults().reorder_level, 4);
        assert_eq!(config.form_defaults().estimated_days, 7);
        assert!(!config.seed_sample_data);
        assert_eq!(config.log_filter, "mobilefixer_store=debug");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[
            (env::REORDER_LEVEL, "ten"),
            (env::RECENT_LIMIT, "-1"),
            (env::SEED_SAMPLE_DATA, "maybe"),
            (env::CURRENCY_DECIMALS, "4"),
        ]));

        assert_eq!(config.default_reorder_level, 10);
        assert_eq!(config.recent_activity_limit, 5);
        assert!(config.seed_sample_data);
        assert_eq!(config.currency_decimals, 2);
    }

    #[test]
    fn test_format_currency() {
        let config = AppConfig::default();
        assert_eq!(config.format_currency(Money::from_minor(1234)), "₹12.34");
        assert_eq!(config.format_currency(Money::from_minor(5)), "₹0.05");
        assert_eq!(config.format_currency(Money::zero()), "₹0.00");
        assert_eq!(config.format_currency(Money::from_minor(-1234)), "-₹12.34");
    }

    #[test]
    fn test_format_currency_fewer_decimals() {
        let config = AppConfig {
            currency_decimals: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.format_currency(Money::from_minor(29999)), "₹300");
        assert_eq!(config.format_currency(Money::from_minor(8949)), "₹89");

        let config = AppConfig {
            currency_decimals: 1,
            ..AppConfig::default()
        };
        assert_eq!(config.format_currency(Money::from_minor(4599)), "₹46.0");
    }

    #[test]
    fn test_format_currency_extremes() {
        let config = AppConfig {
            currency_decimals: 0,
            ..AppConfig::default()
        };
        assert_eq!(
            config.format_currency(Money::from_minor(i64::MAX)),
            "₹92233720368547758"
        );
        assert_eq!(
            config.format_currency(Money::from_minor(i64::MIN)),
            "-₹92233720368547758"
        );
    }
}
