//! Configuration module for invoicing-service.

use rust_decimal::Decimal;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Sales tax applied to the invoice subtotal.
pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Nominal delay before a submission is acknowledged.
pub const DEFAULT_SUBMISSION_DELAY: Duration = Duration::from_millis(1500);

/// How long the success banner stays up after acceptance.
pub const DEFAULT_SUCCESS_DISPLAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone)]
pub struct InvoicingConfig {
    pub common: core_config::Config,
    pub service_name: String,
    pub log_level: String,
    pub tax_rate: Decimal,
    pub submission_delay: Duration,
    pub success_display: Duration,
}

impl Default for InvoicingConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            service_name: "invoicing-service".to_string(),
            log_level: "info".to_string(),
            tax_rate: DEFAULT_TAX_RATE,
            submission_delay: DEFAULT_SUBMISSION_DELAY,
            success_display: DEFAULT_SUCCESS_DISPLAY,
        }
    }
}

impl InvoicingConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| common.log_level.clone());

        Ok(Self {
            common,
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| "invoicing-service".to_string()),
            log_level,
            tax_rate: match env::var("INVOICE_TAX_RATE") {
                Ok(raw) => parse_tax_rate(&raw)?,
                Err(_) => DEFAULT_TAX_RATE,
            },
            submission_delay: duration_from_env("SUBMISSION_DELAY_MS", DEFAULT_SUBMISSION_DELAY)?,
            success_display: duration_from_env("SUCCESS_BANNER_MS", DEFAULT_SUCCESS_DISPLAY)?,
        })
    }
}

/// Parse a tax rate expressed as a fraction, e.g. `0.08`.
pub fn parse_tax_rate(raw: &str) -> Result<Decimal, AppError> {
    let rate = Decimal::from_str(raw.trim()).map_err(|e| {
        AppError::ConfigError(anyhow::anyhow!("INVOICE_TAX_RATE '{}' is not a decimal: {}", raw, e))
    })?;
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(AppError::ConfigError(anyhow::anyhow!(
            "INVOICE_TAX_RATE must be between 0 and 1, got {}",
            rate
        )));
    }
    Ok(rate)
}

fn duration_from_env(key: &str, default: Duration) -> Result<Duration, AppError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|e| AppError::ConfigError(anyhow::anyhow!("{} '{}' is invalid: {}", key, raw, e))),
        Err(_) => Ok(default),
    }
}
