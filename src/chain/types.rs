//! Chain-specific types and error definitions.

use alloy::transports::{RpcError, TransportError};
use thiserror::Error;

/// Errors that can occur during chain operations.
#[derive(Debug, Error)]
pub enum ChainError {
    /// RPC transport failed: endpoint unreachable or misbehaving.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// A contract call failed to execute on the endpoint.
    #[error("call execution failed: {0}")]
    Call(String),

    /// The node rejected the request itself (bad transaction, insufficient
    /// funds, nonce conflict).
    #[error("request rejected: {0}")]
    Rejected(String),

    /// Transaction was mined but reverted on-chain.
    #[error("transaction reverted: {0}")]
    Reverted(String),

    /// Transaction was not confirmed within the expected window.
    #[error("transaction not confirmed after {0} blocks")]
    ConfirmationTimeout(u32),

    /// Invalid private key format or signing error.
    #[error("wallet error: {0}")]
    Wallet(String),

    /// Gas price exceeded the configured maximum.
    #[error("gas price {current_gwei} gwei exceeds maximum {max_gwei} gwei")]
    GasPriceTooHigh { current_gwei: u64, max_gwei: u64 },

    /// Chain configuration mismatch.
    #[error("chain ID mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: u64, actual: u64 },

    /// Invalid configuration value reached the chain layer.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for chain operations.
pub type ChainResult<T> = Result<T, ChainError>;

/// Classification of a failure, deciding whether endpoint rotation can help.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    /// The endpoint is unreachable or malfunctioning; a mirror endpoint may
    /// succeed where this one failed.
    Endpoint,
    /// The request itself is the problem; no endpoint will accept it.
    Application,
}

impl ChainError {
    /// Classify this error for the failover executor.
    ///
    /// Server unavailability and call-execution failures count as endpoint
    /// faults and trigger rotation; everything else is an application fault
    /// and is retried against the same endpoint.
    pub fn fault_kind(&self) -> FaultKind {
        match self {
            ChainError::Rpc(_) | ChainError::Timeout(_) | ChainError::Call(_) => {
                FaultKind::Endpoint
            }
            _ => FaultKind::Application,
        }
    }
}

/// Map a raw transport error into the chain error taxonomy.
///
/// This is the single place where untyped RPC failures enter the system: a
/// JSON-RPC error response means the node processed and refused the request
/// (revert data marks a call-execution fault), while anything else means the
/// endpoint itself failed.
pub fn classify(err: TransportError) -> ChainError {
    match err {
        RpcError::ErrorResp(payload) => {
            if payload.as_revert_data().is_some() {
                ChainError::Call(payload.to_string())
            } else {
                ChainError::Rejected(payload.to_string())
            }
        }
        other => ChainError::Rpc(other.to_string()),
    }
}

/// Transaction confirmation outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationStatus {
    /// Transaction is confirmed with the required block depth.
    Confirmed { block_number: u64 },
    /// Transaction failed or was dropped.
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_faults_rotate() {
        assert_eq!(
            ChainError::Rpc("connection refused".into()).fault_kind(),
            FaultKind::Endpoint
        );
        assert_eq!(ChainError::Timeout(10).fault_kind(), FaultKind::Endpoint);
        assert_eq!(
            ChainError::Call("execution reverted".into()).fault_kind(),
            FaultKind::Endpoint
        );
    }

    #[test]
    fn test_application_faults_do_not_rotate() {
        assert_eq!(
            ChainError::Rejected("insufficient funds".into()).fault_kind(),
            FaultKind::Application
        );
        assert_eq!(
            ChainError::Reverted("out of gas".into()).fault_kind(),
            FaultKind::Application
        );
        assert_eq!(
            ChainError::GasPriceTooHigh { current_gwei: 600, max_gwei: 500 }.fault_kind(),
            FaultKind::Application
        );
        assert_eq!(
            ChainError::Wallet("bad key".into()).fault_kind(),
            FaultKind::Application
        );
    }

    #[test]
    fn test_error_display() {
        let err = ChainError::Timeout(10);
        assert_eq!(err.to_string(), "RPC timeout after 10 seconds");

        let err = ChainError::GasPriceTooHigh { current_gwei: 600, max_gwei: 500 };
        assert!(err.to_string().contains("600"));
    }
}
