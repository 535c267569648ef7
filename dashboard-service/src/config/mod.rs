//! Configuration module for dashboard-service.

use invoicing_service::config::InvoicingConfig;
use service_core::error::AppError;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub invoicing: InvoicingConfig,
    pub service_name: String,
    pub preferences_path: PathBuf,
    /// Fallback when no dark-mode preference has been stored yet.
    pub system_prefers_dark: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            invoicing: InvoicingConfig::default(),
            service_name: "dashboard-service".to_string(),
            preferences_path: PathBuf::from("preferences.json"),
            system_prefers_dark: false,
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let invoicing = InvoicingConfig::from_env()?;

        Ok(Self {
            invoicing,
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| "dashboard-service".to_string()),
            preferences_path: env::var("PREFERENCES_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("preferences.json")),
            system_prefers_dark: match env::var("SYSTEM_PREFERS_DARK") {
                Ok(raw) => parse_bool(&raw).ok_or_else(|| {
                    AppError::ConfigError(anyhow::anyhow!(
                        "SYSTEM_PREFERS_DARK must be true or false, got '{}'",
                        raw
                    ))
                })?,
                Err(_) => false,
            },
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_variants() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" off "), Some(false));
        assert_eq!(parse_bool("dark"), None);
    }
}
