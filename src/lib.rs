//! Automated staking and wrapping cycles for the Monad testnet.
//!
//! The tool stakes the native asset, unstakes it, and wraps/unwraps it into
//! WMON in timed cycles with randomized amounts and delays, gated behind
//! ownership of a specific NFT collection. Every RPC call runs through a
//! failover executor that retries with exponential backoff and rotates
//! across mirror endpoints on endpoint-level faults.

pub mod chain;
pub mod cli;
pub mod config;
pub mod cycles;
pub mod gate;
pub mod protocols;
pub mod resilience;

pub use chain::{ChainClient, ChainError, TxSender, Wallet};
pub use config::BotConfig;
pub use cycles::{CycleRunner, RunPlan};
pub use gate::NftGate;
pub use protocols::Protocol;
pub use resilience::{EndpointPool, FailoverExecutor, RetryPolicy};
