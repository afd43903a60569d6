//! Resilient call execution: bounded retries, exponential backoff, and
//! endpoint failover.
//!
//! # Responsibilities
//! - Run one asynchronous RPC operation with a bounded attempt ceiling
//! - Double the inter-attempt delay after every failure (no jitter)
//! - Rotate to the next endpoint, rebuilding the bound client, when the
//!   failure is an endpoint fault
//!
//! # Design Decisions
//! - Rotation state lives on the executor value, never in a global; two
//!   executors never share a cursor
//! - The operation receives a clone of the current bound client on every
//!   attempt, so anything derived from the client is rebuilt after rotation
//! - The final attempt's error is propagated verbatim, unwrapped

use std::future::Future;
use std::time::Duration;

use url::Url;

use crate::chain::types::{ChainError, FaultKind};
use crate::config::RetryConfig;
use crate::resilience::endpoints::EndpointPool;

/// Per-call retry parameters. Created at the call site and discarded after.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Attempt ceiling, at least 1.
    pub max_attempts: u32,
    /// Delay before the first retry; doubles after every failed attempt.
    pub initial_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_delay: Duration::from_millis(1000),
        }
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            initial_delay: Duration::from_millis(config.initial_delay_ms),
        }
    }
}

/// Executes operations against a rotating pool of endpoints.
///
/// Owns the endpoint cursor and the client bound to the current endpoint.
/// The client is replaced, not mutated, on rotation, and the cursor persists
/// across calls on the same executor.
pub struct FailoverExecutor<C> {
    pool: EndpointPool,
    bind: Box<dyn Fn(&Url) -> C + Send + Sync>,
    client: C,
}

impl<C: Clone> FailoverExecutor<C> {
    /// Build an executor over `pool`, binding a client to the first endpoint.
    pub fn new<F>(pool: EndpointPool, bind: F) -> Self
    where
        F: Fn(&Url) -> C + Send + Sync + 'static,
    {
        let client = bind(pool.current());
        Self {
            pool,
            bind: Box::new(bind),
            client,
        }
    }

    /// The client bound to the current endpoint.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Cursor position in the endpoint pool.
    pub fn endpoint_index(&self) -> usize {
        self.pool.index()
    }

    /// Run `op` with retries, backoff, and endpoint failover.
    ///
    /// `op` is invoked with a clone of the current bound client on every
    /// attempt. Failures before the final attempt are logged and retried
    /// after the current delay; endpoint faults additionally rotate the pool
    /// and rebuild the client first. The final attempt's error is returned
    /// to the caller as-is.
    pub async fn execute<T, Op, Fut>(
        &mut self,
        policy: &RetryPolicy,
        mut op: Op,
    ) -> Result<T, ChainError>
    where
        Op: FnMut(C) -> Fut,
        Fut: Future<Output = Result<T, ChainError>>,
    {
        let max_attempts = policy.max_attempts.max(1);
        let mut delay = policy.initial_delay;

        for attempt in 1..=max_attempts {
            match op(self.client.clone()).await {
                Ok(value) => return Ok(value),
                Err(err) if attempt == max_attempts => return Err(err),
                Err(err) => {
                    tracing::warn!(
                        attempt,
                        max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "attempt failed, retrying"
                    );
                    if err.fault_kind() == FaultKind::Endpoint {
                        self.rotate();
                    }
                    tokio::time::sleep(delay).await;
                    delay = delay.saturating_mul(2);
                }
            }
        }

        unreachable!("loop returns on the final attempt")
    }

    /// Advance to the next endpoint and rebuild the bound client.
    fn rotate(&mut self) {
        self.pool.advance();
        let url = self.pool.current();
        self.client = (self.bind)(url);
        tracing::warn!(
            endpoint = %url,
            index = self.pool.index(),
            "switching to backup RPC endpoint"
        );
    }
}

impl<C> std::fmt::Debug for FailoverExecutor<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FailoverExecutor")
            .field("pool", &self.pool)
            .finish()
    }
}
