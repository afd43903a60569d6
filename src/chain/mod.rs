//! Chain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Key material (env var or key file)
//!     → wallet.rs (key loading, signing)
//!     → client.rs (one endpoint, timeouts, error classification)
//!     → transaction.rs (build, sign, broadcast, confirm)
//! ```
//!
//! # Security Constraints
//! - Private keys only from environment variables or a local key file
//! - Never log private keys or sensitive data
//! - All RPC calls have configurable timeouts

pub mod client;
pub mod transaction;
pub mod types;
pub mod wallet;

pub use client::ChainClient;
pub use transaction::TxSender;
pub use types::{ChainError, ChainResult, ConfirmationStatus, FaultKind};
pub use wallet::Wallet;
