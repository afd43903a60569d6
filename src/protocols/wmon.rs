//! Wrapped MON (WETH9-style) calldata.
//!
//! Both the Rubic and Izumi flows on the testnet route through this one
//! contract, so a single module covers wrapping and unwrapping.

use alloy::primitives::{Bytes, U256};
use alloy::sol;
use alloy::sol_types::SolCall;

sol! {
    /// WETH9-compatible surface of the WMON contract.
    function deposit() external payable;
    function withdraw(uint256 amount) external;
}

/// Calldata for wrapping MON. The amount travels as transaction value.
pub fn wrap_calldata() -> Bytes {
    depositCall {}.abi_encode().into()
}

/// Calldata for unwrapping `amount` of WMON back into MON.
pub fn unwrap_calldata(amount: U256) -> Bytes {
    withdrawCall { amount }.abi_encode().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weth9_selectors() {
        assert_eq!(depositCall::SELECTOR, [0xd0, 0xe3, 0x0d, 0xb0]);
        assert_eq!(withdrawCall::SELECTOR, [0x2e, 0x1a, 0x7d, 0x4d]);
    }

    #[test]
    fn test_unwrap_calldata_layout() {
        let data = unwrap_calldata(U256::from(1000u64));
        assert_eq!(data.len(), 36);
        assert_eq!(&data[..4], &[0x2e, 0x1a, 0x7d, 0x4d]);
        assert_eq!(u16::from_be_bytes([data[34], data[35]]), 1000);
    }
}
