//! Randomized cycle cadence.
//!
//! Amounts and delays are drawn fresh for every cycle so the on-chain
//! footprint does not look machine-stamped. Amounts are rounded to four
//! decimal places before conversion to wei, matching what a human staking
//! by hand would type.

use alloy::primitives::utils::parse_ether;
use alloy::primitives::U256;
use rand::Rng;
use std::time::Duration;

use crate::chain::types::{ChainError, ChainResult};
use crate::config::CycleConfig;

/// Draw a random stake amount in wei from the configured MON range.
pub fn random_amount(config: &CycleConfig) -> ChainResult<U256> {
    let mon = rand::thread_rng().gen_range(config.min_amount_mon..=config.max_amount_mon);
    let rounded = format!("{:.4}", mon);
    parse_ether(&rounded)
        .map_err(|e| ChainError::Config(format!("invalid stake amount '{}': {}", rounded, e)))
}

/// Draw a random delay from the configured range.
pub fn random_delay(config: &CycleConfig) -> Duration {
    let secs = rand::thread_rng().gen_range(config.min_delay_secs..=config.max_delay_secs);
    Duration::from_secs(secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_stays_in_range() {
        let config = CycleConfig::default();
        let floor = parse_ether("0.01").unwrap();
        let ceiling = parse_ether("0.05").unwrap();

        for _ in 0..100 {
            let amount = random_amount(&config).unwrap();
            assert!(amount >= floor, "amount {} below floor", amount);
            assert!(amount <= ceiling, "amount {} above ceiling", amount);
        }
    }

    #[test]
    fn test_amount_has_four_decimal_precision() {
        let config = CycleConfig::default();
        // 0.0001 MON in wei; every drawn amount must be a multiple.
        let step = parse_ether("0.0001").unwrap();
        for _ in 0..20 {
            let amount = random_amount(&config).unwrap();
            assert_eq!(amount % step, U256::ZERO);
        }
    }

    #[test]
    fn test_delay_stays_in_range() {
        let config = CycleConfig::default();
        for _ in 0..100 {
            let delay = random_delay(&config);
            assert!(delay >= Duration::from_secs(60));
            assert!(delay <= Duration::from_secs(180));
        }
    }

    #[test]
    fn test_pinned_range_is_deterministic() {
        let config = CycleConfig {
            min_amount_mon: 0.02,
            max_amount_mon: 0.02,
            min_delay_secs: 90,
            max_delay_secs: 90,
        };
        assert_eq!(random_amount(&config).unwrap(), parse_ether("0.02").unwrap());
        assert_eq!(random_delay(&config), Duration::from_secs(90));
    }
}
