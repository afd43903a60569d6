//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the cycle
//! runner. All types derive Serde traits for deserialization from config
//! files, and every default points at the public Monad testnet so the tool
//! runs without a config file at all.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration for the cycle runner.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct BotConfig {
    /// RPC endpoint pool and chain parameters.
    pub rpc: RpcConfig,

    /// Retry and failover behavior for RPC calls.
    pub retry: RetryConfig,

    /// NFT ownership gate.
    pub gate: GateConfig,

    /// Wallet key sources.
    pub wallet: WalletConfig,

    /// Gas limits and price guards.
    pub gas: GasConfig,

    /// Cycle cadence: amount and delay ranges.
    pub cycle: CycleConfig,

    /// Protocol contract addresses.
    pub contracts: ContractsConfig,
}

/// RPC endpoint and chain configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RpcConfig {
    /// Ordered list of JSON-RPC endpoint URLs. The first entry is the
    /// primary; the rest are rotated to on endpoint faults.
    pub endpoints: Vec<String>,

    /// Expected chain ID (10143 for the Monad testnet).
    pub chain_id: u64,

    /// Per-request RPC timeout in seconds.
    pub rpc_timeout_secs: u64,

    /// Number of block confirmations required for finality.
    pub confirmation_blocks: u32,

    /// Maximum time to wait for a transaction confirmation in seconds.
    pub confirm_timeout_secs: u64,

    /// Explorer URL prefix for transaction links.
    pub explorer_url: String,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            endpoints: vec![
                "https://testnet-rpc.monad.xyz/".to_string(),
                "https://testnet-rpc.monad.network/".to_string(),
                "https://testnet-rpc.monad.io/".to_string(),
            ],
            chain_id: 10143,
            rpc_timeout_secs: 10,
            confirmation_blocks: 1,
            confirm_timeout_secs: 180,
            explorer_url: "https://testnet.monadexplorer.com/tx/".to_string(),
        }
    }
}

/// Retry configuration for the failover executor.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum number of attempts per call (at least 1).
    pub max_attempts: u32,

    /// Delay before the first retry in milliseconds; doubles per attempt.
    pub initial_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_delay_ms: 1000,
        }
    }
}

/// NFT ownership gate configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GateConfig {
    /// Enable the ownership check before running any protocol.
    pub enabled: bool,

    /// ERC-721 collection address the wallet must hold a token from.
    pub collection: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            collection: "0x07D280bc6d7Bf3eBd231296d525936748598df83".to_string(),
        }
    }
}

/// Wallet key source configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct WalletConfig {
    /// Optional JSON file holding an array of hex private keys; the first
    /// entry is used. When unset the key is read from the environment.
    pub keys_file: Option<PathBuf>,
}

/// Gas limits and price guards.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GasConfig {
    /// Gas limit for stake/deposit transactions.
    pub stake_limit: u64,

    /// Gas limit for unstake/withdraw transactions.
    pub unstake_limit: u64,

    /// Gas price multiplier (1.0 = estimated, 1.2 = 20% buffer).
    pub price_multiplier: f64,

    /// Maximum gas price in gwei (protection against spikes).
    pub max_price_gwei: u64,
}

impl Default for GasConfig {
    fn default() -> Self {
        Self {
            stake_limit: 500_000,
            unstake_limit: 800_000,
            price_multiplier: 1.2,
            max_price_gwei: 500,
        }
    }
}

/// Cycle cadence configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CycleConfig {
    /// Minimum stake amount per cycle in MON.
    pub min_amount_mon: f64,

    /// Maximum stake amount per cycle in MON.
    pub max_amount_mon: f64,

    /// Minimum delay between actions in seconds.
    pub min_delay_secs: u64,

    /// Maximum delay between actions in seconds.
    pub max_delay_secs: u64,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            min_amount_mon: 0.01,
            max_amount_mon: 0.05,
            min_delay_secs: 60,
            max_delay_secs: 180,
        }
    }
}

/// Protocol contract addresses on the Monad testnet.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContractsConfig {
    /// Magma staking contract.
    pub magma: String,

    /// aPriori liquid-staking vault.
    pub apriori: String,

    /// Wrapped MON (WETH9-style) contract.
    pub wmon: String,
}

impl Default for ContractsConfig {
    fn default() -> Self {
        Self {
            magma: "0x2c9C959516e9AAEdB2C748224a41249202ca8BE7".to_string(),
            apriori: "0xb2f82D0f38dc453D596Ad40A37799446Cc89274A".to_string(),
            wmon: "0x760AfE86e5de5fa0Ee542fc7B7B713e1c5425701".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_testnet() {
        let config = BotConfig::default();
        assert_eq!(config.rpc.endpoints.len(), 3);
        assert_eq!(config.rpc.chain_id, 10143);
        assert_eq!(config.retry.max_attempts, 5);
        assert_eq!(config.retry.initial_delay_ms, 1000);
        assert!(config.gate.enabled);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let toml = r#"
            [retry]
            max_attempts = 3

            [cycle]
            min_amount_mon = 0.02
        "#;
        let config: BotConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.retry.max_attempts, 3);
        // Untouched sections keep their defaults
        assert_eq!(config.retry.initial_delay_ms, 1000);
        assert_eq!(config.cycle.min_amount_mon, 0.02);
        assert_eq!(config.cycle.max_amount_mon, 0.05);
        assert_eq!(config.rpc.endpoints.len(), 3);
    }
}
