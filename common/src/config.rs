//! Site-wide configuration.
//!
//! Values come from a key lookup (build-time `option_env!` in the browser,
//! process environment on the host) and fall back to the defaults the site
//! has always shipped with. Missing keys are logged at `info`, malformed
//! numbers are rejected.

use std::fmt::Display;
use std::str::FromStr;

use log::info;

use crate::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Base URL of the verification/registration API, without trailing slash.
    pub api_base_url: String,
    /// Delay between camera acquisition and the simulated QR decode.
    pub scan_delay_ms: u32,
    /// Total duration of a stats counter animation.
    pub counter_duration_ms: u32,
    /// Interval between two counter animation ticks.
    pub counter_tick_ms: u32,
    /// Scroll offset past which the navbar switches to its `scrolled` look.
    pub nav_scrolled_offset: f64,
    /// Scroll offset past which the back-to-top button is shown.
    pub back_to_top_offset: f64,
    /// Navbar height used for anchor scrolling when the navbar is not mounted.
    pub nav_fallback_height: f64,
    /// Simulated round trip of the contact form.
    pub contact_delay_ms: u32,
    /// Lifetime of transient form messages and toasts.
    pub toast_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            scan_delay_ms: 3000,
            counter_duration_ms: 2000,
            counter_tick_ms: 16,
            nav_scrolled_offset: 100.0,
            back_to_top_offset: 300.0,
            nav_fallback_height: 80.0,
            contact_delay_ms: 2000,
            toast_ms: 5000,
        }
    }
}

impl SiteConfig {
    /// Builds a configuration from `lookup`, keyed by `PHARMALEDGER_*` names.
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let api_base_url = lookup("PHARMALEDGER_API_BASE")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| {
                info!("PHARMALEDGER_API_BASE not set, using default: {}", defaults.api_base_url);
                defaults.api_base_url.clone()
            });

        Ok(Self {
            api_base_url,
            scan_delay_ms: load(&lookup, "PHARMALEDGER_SCAN_DELAY_MS", defaults.scan_delay_ms)?,
            counter_duration_ms: load(
                &lookup,
                "PHARMALEDGER_COUNTER_DURATION_MS",
                defaults.counter_duration_ms,
            )?,
            counter_tick_ms: load(&lookup, "PHARMALEDGER_COUNTER_TICK_MS", defaults.counter_tick_ms)?
                .max(1),
            nav_scrolled_offset: defaults.nav_scrolled_offset,
            back_to_top_offset: defaults.back_to_top_offset,
            nav_fallback_height: defaults.nav_fallback_height,
            contact_delay_ms: load(&lookup, "PHARMALEDGER_CONTACT_DELAY_MS", defaults.contact_delay_ms)?,
            toast_ms: load(&lookup, "PHARMALEDGER_TOAST_MS", defaults.toast_ms)?,
        })
    }

    /// Absolute URL of an API path such as `/api/verify-batch`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

fn load<L, T>(lookup: &L, key: &'static str, default: T) -> Result<T, ConfigError>
where
    L: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = SiteConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(
            config.endpoint("/api/verify-batch"),
            "http://127.0.0.1:5000/api/verify-batch"
        );
    }

    #[test]
    fn overrides_are_trimmed() {
        let env: HashMap<&str, &str> = [
            ("PHARMALEDGER_API_BASE", " https://api.pharmaledger.test/ "),
            ("PHARMALEDGER_SCAN_DELAY_MS", "500"),
        ]
        .into_iter()
        .collect();
        let config = SiteConfig::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.api_base_url, "https://api.pharmaledger.test");
        assert_eq!(config.scan_delay_ms, 500);
    }

    #[test]
    fn malformed_number_is_rejected() {
        let err = SiteConfig::from_lookup(|k| {
            (k == "PHARMALEDGER_TOAST_MS").then(|| "soon".to_string())
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { key: "PHARMALEDGER_TOAST_MS", .. }
        ));
    }
}
