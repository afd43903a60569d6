//! Per-protocol transaction encoding.
//!
//! Each module knows one contract surface: which address to hit, which
//! calldata to send, nothing more. Orchestration (amounts, delays, cycle
//! order) lives in `cycles`.

pub mod apriori;
pub mod magma;
pub mod wmon;

use alloy::primitives::Address;

use crate::chain::types::{ChainError, ChainResult};
use crate::config::schema::ContractsConfig;

/// The protocols a run can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    /// Magma: stake MON, receive gMON, unstake later.
    Magma,
    /// aPriori: deposit MON into the liquid-staking vault.
    Apriori,
    /// WMON: wrap MON into the WETH9-style wrapped token and unwrap back.
    Wmon,
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Protocol::Magma => write!(f, "magma"),
            Protocol::Apriori => write!(f, "apriori"),
            Protocol::Wmon => write!(f, "wmon"),
        }
    }
}

/// Contract addresses resolved from configuration strings.
#[derive(Debug, Clone, Copy)]
pub struct ContractAddresses {
    pub magma: Address,
    pub apriori: Address,
    pub wmon: Address,
}

impl ContractAddresses {
    pub fn from_config(config: &ContractsConfig) -> ChainResult<Self> {
        let parse = |field: &str, value: &str| {
            value.parse::<Address>().map_err(|e| {
                ChainError::Config(format!("invalid {} address '{}': {}", field, value, e))
            })
        };
        Ok(Self {
            magma: parse("magma", &config.magma)?,
            apriori: parse("apriori", &config.apriori)?,
            wmon: parse("wmon", &config.wmon)?,
        })
    }
}
