//! Cycle orchestration subsystem.
//!
//! # Data Flow
//! ```text
//! RunPlan (protocol, cycle count, optional fixed interval)
//!     → runner.rs (per-cycle transaction sequence)
//!     → schedule.rs (random amount + delay per cycle)
//!     → chain::TxSender (build/sign/broadcast/confirm)
//! ```

pub mod runner;
pub mod schedule;

pub use runner::{CycleRunner, RunPlan};
