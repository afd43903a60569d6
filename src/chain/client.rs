//! Chain RPC client bound to a single endpoint.
//!
//! # Responsibilities
//! - Connect to one JSON-RPC endpoint
//! - Query chain state (block number, balances, receipts)
//! - Submit signed raw transactions
//! - Enforce a per-request timeout and map raw errors into the taxonomy
//!
//! A `ChainClient` knows nothing about failover: it is built for exactly one
//! URL and is replaced wholesale by the failover executor when the endpoint
//! rotates.

use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use alloy::transports::TransportError;
use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use url::Url;

use crate::chain::types::{classify, ChainError, ChainResult};

/// RPC client wrapper bound to one endpoint URL.
#[derive(Clone)]
pub struct ChainClient {
    provider: Arc<dyn Provider + Send + Sync>,
    url: Url,
    timeout_duration: Duration,
}

impl ChainClient {
    /// Build a client for the given endpoint.
    pub fn connect(url: &Url, timeout_duration: Duration) -> Self {
        let provider = Arc::new(ProviderBuilder::new().connect_http(url.clone()))
            as Arc<dyn Provider + Send + Sync>;
        Self {
            provider,
            url: url.clone(),
            timeout_duration,
        }
    }

    /// The endpoint this client is bound to.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Run an RPC future under the configured timeout, mapping errors.
    async fn guard<T, F>(&self, fut: F) -> ChainResult<T>
    where
        F: IntoFuture<Output = Result<T, TransportError>>,
    {
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(classify(e)),
            Err(_) => Err(ChainError::Timeout(self.timeout_duration.as_secs())),
        }
    }

    /// Get the chain ID from the endpoint.
    pub async fn chain_id(&self) -> ChainResult<u64> {
        self.guard(self.provider.get_chain_id()).await
    }

    /// Get the latest block number.
    pub async fn block_number(&self) -> ChainResult<u64> {
        self.guard(self.provider.get_block_number()).await
    }

    /// Get the native balance of an address.
    pub async fn balance(&self, address: Address) -> ChainResult<U256> {
        self.guard(self.provider.get_balance(address)).await
    }

    /// Get the transaction count (nonce) for an address.
    pub async fn transaction_count(&self, address: Address) -> ChainResult<u64> {
        self.guard(self.provider.get_transaction_count(address)).await
    }

    /// Get the current gas price in wei.
    pub async fn gas_price(&self) -> ChainResult<u128> {
        self.guard(self.provider.get_gas_price()).await
    }

    /// Get a transaction receipt by hash.
    pub async fn transaction_receipt(
        &self,
        tx_hash: TxHash,
    ) -> ChainResult<Option<TransactionReceipt>> {
        self.guard(self.provider.get_transaction_receipt(tx_hash)).await
    }

    /// Execute a read-only contract call.
    pub async fn call(&self, tx: TransactionRequest) -> ChainResult<Bytes> {
        self.guard(self.provider.call(tx)).await
    }

    /// Broadcast a signed raw transaction and return its hash.
    pub async fn send_raw_transaction(&self, raw: &[u8]) -> ChainResult<TxHash> {
        let pending = self.guard(self.provider.send_raw_transaction(raw)).await?;
        Ok(*pending.tx_hash())
    }
}

impl std::fmt::Debug for ChainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainClient")
            .field("url", &self.url.as_str())
            .field("timeout_secs", &self.timeout_duration.as_secs())
            .finish()
    }
}
