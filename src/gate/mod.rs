//! Wallet gating subsystem.
//!
//! Every run starts with an ownership check: the wallet must hold a token
//! from the configured ERC-721 collection before any protocol is touched.
//! The check itself goes through the same failover executor as everything
//! else, so a flaky endpoint does not lock a legitimate holder out.

pub mod nft;

pub use nft::NftGate;
