//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! RPC operation:
//!     → executor.rs (attempt against the bound client)
//!     → On endpoint fault: endpoints.rs (rotate cursor), rebuild client
//!     → Backoff delay (doubles per attempt), retry
//!     → Attempt ceiling reached: propagate the original error
//! ```
//!
//! # Design Decisions
//! - Rotation only on endpoint faults; a mirror cannot fix a bad request
//! - Application faults still back off and retry against the same endpoint
//! - Backoff is deterministic (no jitter): a single sequential caller cannot
//!   produce a thundering herd

pub mod endpoints;
pub mod executor;

pub use endpoints::EndpointPool;
pub use executor::{FailoverExecutor, RetryPolicy};
