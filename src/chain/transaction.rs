//! Transaction building, signing, and confirmation monitoring.
//!
//! # Responsibilities
//! - Build transactions with explicit gas limits and a gas price guard
//! - Sign locally and broadcast through the failover executor
//! - Monitor confirmations by polling receipts

use alloy::eips::eip2718::Encodable2718;
use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::rpc::types::TransactionRequest;
use std::time::Duration;
use tokio::time::{interval, timeout};

use crate::chain::client::ChainClient;
use crate::chain::types::{ChainError, ChainResult, ConfirmationStatus};
use crate::chain::wallet::Wallet;
use crate::config::{BotConfig, GasConfig};
use crate::resilience::{FailoverExecutor, RetryPolicy};

/// Builds, signs, and submits transactions resiliently.
pub struct TxSender {
    wallet: Wallet,
    gas: GasConfig,
    retry: RetryPolicy,
    confirmation_blocks: u32,
    explorer_url: String,
}

impl TxSender {
    /// Create a sender for the given wallet and configuration.
    pub fn new(wallet: Wallet, config: &BotConfig) -> Self {
        Self {
            wallet,
            gas: config.gas.clone(),
            retry: RetryPolicy::from(&config.retry),
            confirmation_blocks: config.rpc.confirmation_blocks,
            explorer_url: config.rpc.explorer_url.clone(),
        }
    }

    /// The sending wallet's address.
    pub fn address(&self) -> Address {
        self.wallet.address()
    }

    /// Build, sign, and broadcast a transaction, retrying with failover.
    ///
    /// The nonce and gas price are re-queried on every attempt so a retry
    /// after rotation never reuses stale chain state from a dead endpoint.
    pub async fn send(
        &self,
        exec: &mut FailoverExecutor<ChainClient>,
        to: Address,
        value: U256,
        data: Bytes,
        gas_limit: u64,
    ) -> ChainResult<TxHash> {
        let wallet = self.wallet.clone();
        let signer = wallet.signer();
        let gas = self.gas.clone();

        let hash = exec
            .execute(&self.retry, move |client| {
                let wallet = wallet.clone();
                let signer = signer.clone();
                let gas = gas.clone();
                let data = data.clone();
                async move {
                    let chain_nonce = client.transaction_count(wallet.address()).await?;
                    wallet.set_nonce(chain_nonce);

                    let gas_price = client.gas_price().await?;
                    let gas_price_gwei = gas_price / 1_000_000_000;
                    if gas_price_gwei > gas.max_price_gwei as u128 {
                        return Err(ChainError::GasPriceTooHigh {
                            current_gwei: gas_price_gwei as u64,
                            max_gwei: gas.max_price_gwei,
                        });
                    }
                    let adjusted_gas_price = (gas_price as f64 * gas.price_multiplier) as u128;

                    let tx = TransactionRequest::default()
                        .with_to(to)
                        .with_value(value)
                        .with_input(data)
                        .with_nonce(wallet.get_and_increment_nonce())
                        .with_gas_price(adjusted_gas_price)
                        .with_chain_id(wallet.chain_id())
                        .with_gas_limit(gas_limit);

                    let envelope = tx
                        .build(&signer)
                        .await
                        .map_err(|e| ChainError::Wallet(format!("Signing failed: {}", e)))?;

                    client.send_raw_transaction(&envelope.encoded_2718()).await
                }
            })
            .await?;

        tracing::info!(
            tx_hash = %hash,
            explorer = %format!("{}{}", self.explorer_url, hash),
            "Transaction sent"
        );
        Ok(hash)
    }

    /// Wait for a transaction to reach the required confirmation depth.
    ///
    /// # Arguments
    /// * `tx_hash` - Transaction hash to monitor
    /// * `timeout_secs` - Maximum time to wait for confirmation
    pub async fn wait_for_confirmation(
        &self,
        exec: &mut FailoverExecutor<ChainClient>,
        tx_hash: TxHash,
        timeout_secs: u64,
    ) -> ChainResult<ConfirmationStatus> {
        let required_confirmations = self.confirmation_blocks;
        let timeout_duration = Duration::from_secs(timeout_secs);
        let poll_interval = Duration::from_secs(2);

        let result = timeout(timeout_duration, async {
            let mut ticker = interval(poll_interval);

            loop {
                ticker.tick().await;

                let receipt = exec
                    .execute(&self.retry, |client| async move {
                        client.transaction_receipt(tx_hash).await
                    })
                    .await?;
                let receipt = match receipt {
                    Some(r) => r,
                    None => {
                        tracing::debug!(tx_hash = %tx_hash, "Transaction pending");
                        continue;
                    }
                };

                if !receipt.status() {
                    return Ok(ConfirmationStatus::Failed(
                        "Transaction reverted".to_string(),
                    ));
                }

                let current_block = exec
                    .execute(&self.retry, |client| async move {
                        client.block_number().await
                    })
                    .await?;
                let tx_block = receipt.block_number.unwrap_or(current_block);
                let confirmations = current_block.saturating_sub(tx_block) as u32;

                if confirmations >= required_confirmations {
                    return Ok(ConfirmationStatus::Confirmed {
                        block_number: tx_block,
                    });
                }

                tracing::debug!(
                    tx_hash = %tx_hash,
                    confirmations,
                    required = required_confirmations,
                    "Waiting for confirmations"
                );
            }
        })
        .await;

        match result {
            Ok(status) => status,
            Err(_) => Err(ChainError::ConfirmationTimeout(required_confirmations)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_PRIVATE_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn test_sender_uses_wallet_address() {
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY, 10143).unwrap();
        let sender = TxSender::new(wallet, &BotConfig::default());
        assert_eq!(
            sender.address().to_string().to_lowercase(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }

    #[test]
    fn test_confirmation_status() {
        let status = ConfirmationStatus::Confirmed { block_number: 100 };
        assert!(matches!(status, ConfirmationStatus::Confirmed { .. }));

        let status = ConfirmationStatus::Failed("reverted".into());
        assert!(matches!(status, ConfirmationStatus::Failed(_)));
    }
}
