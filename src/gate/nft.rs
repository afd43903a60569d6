//! ERC-721 ownership verification.

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, U256};
use alloy::rpc::types::TransactionRequest;
use alloy::sol;
use alloy::sol_types::SolCall;

use crate::chain::client::ChainClient;
use crate::chain::types::{ChainError, ChainResult};
use crate::resilience::{FailoverExecutor, RetryPolicy};

sol! {
    /// Minimal ERC-721 view surface used by the ownership gate.
    function balanceOf(address owner) external view returns (uint256);
}

/// Checks that a wallet holds at least one token from a collection.
pub struct NftGate {
    collection: Address,
}

impl NftGate {
    pub fn new(collection: Address) -> Self {
        Self { collection }
    }

    /// Query the collection's `balanceOf(owner)` through the failover
    /// executor and report whether the balance is nonzero.
    pub async fn verify(
        &self,
        exec: &mut FailoverExecutor<ChainClient>,
        policy: &RetryPolicy,
        owner: Address,
    ) -> ChainResult<bool> {
        let collection = self.collection;

        let balance: U256 = exec
            .execute(policy, move |client| async move {
                let data = balanceOfCall { owner }.abi_encode();
                let tx = TransactionRequest::default()
                    .with_to(collection)
                    .with_input(data);
                let out = client.call(tx).await?;
                balanceOfCall::abi_decode_returns(out.as_ref())
                    .map_err(|e| ChainError::Call(format!("balanceOf decode failed: {}", e)))
            })
            .await?;

        let holder = !balance.is_zero();
        if holder {
            tracing::info!(owner = %owner, collection = %collection, "NFT verification successful");
        } else {
            tracing::warn!(owner = %owner, collection = %collection, "No NFT found for wallet");
        }
        Ok(holder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_of_selector() {
        // keccak256("balanceOf(address)")[..4]
        assert_eq!(balanceOfCall::SELECTOR, [0x70, 0xa0, 0x82, 0x31]);
    }

    #[test]
    fn test_balance_of_calldata_layout() {
        let owner: Address = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
            .parse()
            .unwrap();
        let data = balanceOfCall { owner }.abi_encode();
        assert_eq!(data.len(), 36);
        // Address is right-aligned in the single 32-byte argument slot.
        assert_eq!(&data[16..36], owner.as_slice());
    }
}
