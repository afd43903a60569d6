//! aPriori liquid-staking calldata.

use alloy::primitives::{Address, Bytes, U256};
use alloy::sol;
use alloy::sol_types::SolCall;

sol! {
    /// ERC-4626 entry point of the aPriori vault.
    function deposit(uint256 assets, address receiver) external payable returns (uint256 shares);
}

/// Calldata for depositing `amount` of MON for `receiver`. The same amount
/// must also travel as transaction value.
pub fn stake_calldata(amount: U256, receiver: Address) -> Bytes {
    depositCall {
        assets: amount,
        receiver,
    }
    .abi_encode()
    .into()
}
