//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check endpoint URLs and contract addresses parse
//! - Validate value ranges (timeouts > 0, min <= max)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: BotConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use alloy::primitives::Address;
use url::Url;

use crate::config::schema::BotConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyEndpointPool,
    InvalidEndpoint(String),
    InvalidAddress { field: &'static str, value: String },
    ZeroAttempts,
    ZeroTimeout(&'static str),
    InvalidRange { field: &'static str },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyEndpointPool => {
                write!(f, "rpc.endpoints must contain at least one URL")
            }
            ValidationError::InvalidEndpoint(url) => {
                write!(f, "invalid RPC endpoint URL '{}'", url)
            }
            ValidationError::InvalidAddress { field, value } => {
                write!(f, "invalid address for {}: '{}'", field, value)
            }
            ValidationError::ZeroAttempts => {
                write!(f, "retry.max_attempts must be at least 1")
            }
            ValidationError::ZeroTimeout(field) => {
                write!(f, "{} must be greater than zero", field)
            }
            ValidationError::InvalidRange { field } => {
                write!(f, "{}: minimum must be positive and not exceed maximum", field)
            }
        }
    }
}

/// Validate a configuration, collecting every semantic error.
pub fn validate_config(config: &BotConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.rpc.endpoints.is_empty() {
        errors.push(ValidationError::EmptyEndpointPool);
    }
    for endpoint in &config.rpc.endpoints {
        if endpoint.parse::<Url>().is_err() {
            errors.push(ValidationError::InvalidEndpoint(endpoint.clone()));
        }
    }

    if config.retry.max_attempts == 0 {
        errors.push(ValidationError::ZeroAttempts);
    }
    if config.rpc.rpc_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("rpc.rpc_timeout_secs"));
    }
    if config.rpc.confirm_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("rpc.confirm_timeout_secs"));
    }

    if config.cycle.min_amount_mon <= 0.0
        || config.cycle.min_amount_mon > config.cycle.max_amount_mon
    {
        errors.push(ValidationError::InvalidRange { field: "cycle amount" });
    }
    if config.cycle.min_delay_secs > config.cycle.max_delay_secs {
        errors.push(ValidationError::InvalidRange { field: "cycle delay" });
    }

    let addresses = [
        ("contracts.magma", &config.contracts.magma),
        ("contracts.apriori", &config.contracts.apriori),
        ("contracts.wmon", &config.contracts.wmon),
    ];
    for (field, value) in addresses {
        if value.parse::<Address>().is_err() {
            errors.push(ValidationError::InvalidAddress {
                field,
                value: value.clone(),
            });
        }
    }
    if config.gate.enabled && config.gate.collection.parse::<Address>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "gate.collection",
            value: config.gate.collection.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&BotConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = BotConfig::default();
        config.rpc.endpoints = vec!["not a url".to_string()];
        config.retry.max_attempts = 0;
        config.contracts.magma = "0xnope".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::ZeroAttempts));
    }

    #[test]
    fn test_amount_range_checked() {
        let mut config = BotConfig::default();
        config.cycle.min_amount_mon = 0.1;
        config.cycle.max_amount_mon = 0.05;

        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            errors[0],
            ValidationError::InvalidRange { field: "cycle amount" }
        ));
    }

    #[test]
    fn test_gate_address_skipped_when_disabled() {
        let mut config = BotConfig::default();
        config.gate.enabled = false;
        config.gate.collection = "garbage".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
