//! Magma staking calldata.
//!
//! The Magma staking contract is unverified on the testnet explorer, so the
//! entry points are pinned by selector rather than by signature: staking is
//! a value-bearing call with a bare 4-byte selector, unstaking takes the
//! gMON amount as its single word-sized argument.

use alloy::primitives::{Bytes, U256};

/// Selector of the stake entry point.
pub const STAKE_SELECTOR: [u8; 4] = [0xd5, 0x57, 0x59, 0x82];

/// Selector of the unstake entry point.
pub const UNSTAKE_SELECTOR: [u8; 4] = [0x6f, 0xed, 0x1e, 0xa7];

/// Calldata for staking MON. The amount travels as transaction value.
pub fn stake_calldata() -> Bytes {
    Bytes::from_static(&STAKE_SELECTOR)
}

/// Calldata for unstaking `amount` of gMON.
pub fn unstake_calldata(amount: U256) -> Bytes {
    let mut data = Vec::with_capacity(36);
    data.extend_from_slice(&UNSTAKE_SELECTOR);
    data.extend_from_slice(&amount.to_be_bytes::<32>());
    data.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stake_calldata_is_bare_selector() {
        assert_eq!(stake_calldata().as_ref(), &STAKE_SELECTOR);
    }

    #[test]
    fn test_unstake_calldata_layout() {
        let amount = U256::from(0x0102030405060708u64);
        let data = unstake_calldata(amount);
        assert_eq!(data.len(), 36);
        assert_eq!(&data[..4], &UNSTAKE_SELECTOR);
        // Amount is big-endian, right-aligned in the 32-byte word.
        assert_eq!(&data[4..28], &[0u8; 24]);
        assert_eq!(&data[28..36], &[1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
