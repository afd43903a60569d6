//! End-to-end failover scenarios for the resilient call executor.
//!
//! These drive the executor through a scripted client the same way the
//! protocol code does, checking attempt counts, rotation order, and the
//! backoff timeline under a paused clock.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

use monad_cycler::chain::ChainError;
use monad_cycler::resilience::{EndpointPool, FailoverExecutor, RetryPolicy};

/// Client stand-in that remembers the endpoint it was bound to.
#[derive(Clone, Debug)]
struct MirrorClient {
    endpoint: String,
}

struct Harness {
    exec: FailoverExecutor<MirrorClient>,
    rebuilds: Arc<AtomicUsize>,
}

fn harness(pool_size: usize) -> Harness {
    let urls = (0..pool_size)
        .map(|i| format!("http://rpc{}.example.com/", i))
        .collect::<Vec<_>>();
    let pool = EndpointPool::from_strings(&urls).unwrap();

    let rebuilds = Arc::new(AtomicUsize::new(0));
    let counter = rebuilds.clone();
    let exec = FailoverExecutor::new(pool, move |url| {
        counter.fetch_add(1, Ordering::SeqCst);
        MirrorClient {
            endpoint: url.as_str().to_string(),
        }
    });

    Harness { exec, rebuilds }
}

fn endpoint_fault() -> ChainError {
    ChainError::Rpc("server unavailable".into())
}

fn application_fault() -> ChainError {
    ChainError::Rejected("insufficient funds".into())
}

#[tokio::test(start_paused = true)]
async fn four_endpoint_faults_then_success_walks_the_pool() {
    let mut h = harness(3);
    let policy = RetryPolicy {
        max_attempts: 5,
        initial_delay: Duration::from_millis(1000),
    };
    let seen = RefCell::new(Vec::new());
    let started = Instant::now();

    let value = h
        .exec
        .execute(&policy, |client| {
            seen.borrow_mut().push(client.endpoint.clone());
            let attempt = seen.borrow().len();
            async move {
                if attempt <= 4 {
                    Err(endpoint_fault())
                } else {
                    Ok("receipt")
                }
            }
        })
        .await
        .unwrap();

    assert_eq!(value, "receipt");
    assert_eq!(
        *seen.borrow(),
        vec![
            "http://rpc0.example.com/",
            "http://rpc1.example.com/",
            "http://rpc2.example.com/",
            "http://rpc0.example.com/",
            "http://rpc1.example.com/",
        ]
    );
    assert_eq!(h.exec.endpoint_index(), 1);
    // One initial bind plus one rebuild per rotation.
    assert_eq!(h.rebuilds.load(Ordering::SeqCst), 5);
    // 1000 + 2000 + 4000 + 8000 ms of backoff.
    assert_eq!(started.elapsed(), Duration::from_millis(15_000));
}

#[tokio::test(start_paused = true)]
async fn single_attempt_propagates_without_rotation_or_delay() {
    let mut h = harness(3);
    let policy = RetryPolicy {
        max_attempts: 1,
        initial_delay: Duration::from_millis(1000),
    };
    let started = Instant::now();

    let err = h
        .exec
        .execute(&policy, |_client| async { Err::<(), _>(endpoint_fault()) })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "RPC error: server unavailable");
    assert_eq!(h.exec.endpoint_index(), 0);
    assert_eq!(h.rebuilds.load(Ordering::SeqCst), 1);
    assert_eq!(started.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn mixed_faults_rotate_only_on_endpoint_errors() {
    let mut h = harness(3);
    let policy = RetryPolicy {
        max_attempts: 5,
        initial_delay: Duration::from_millis(1000),
    };
    let outcomes = RefCell::new(VecDeque::from([
        Err(endpoint_fault()),
        Err(application_fault()),
        Err(endpoint_fault()),
        Ok(99u64),
    ]));
    let seen = RefCell::new(Vec::new());
    let started = Instant::now();

    let value = h
        .exec
        .execute(&policy, |client| {
            seen.borrow_mut().push(client.endpoint.clone());
            let next = outcomes.borrow_mut().pop_front().unwrap();
            async move { next }
        })
        .await
        .unwrap();

    assert_eq!(value, 99);
    // The application fault on attempt 2 stays on rpc1.
    assert_eq!(
        *seen.borrow(),
        vec![
            "http://rpc0.example.com/",
            "http://rpc1.example.com/",
            "http://rpc1.example.com/",
            "http://rpc2.example.com/",
        ]
    );
    // Backoff applies to every failure regardless of kind: 1 + 2 + 4 s.
    assert_eq!(started.elapsed(), Duration::from_millis(7_000));
}

#[tokio::test(start_paused = true)]
async fn exhaustion_returns_the_final_error_unwrapped() {
    let mut h = harness(2);
    let policy = RetryPolicy {
        max_attempts: 3,
        initial_delay: Duration::from_millis(500),
    };
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();

    let err = h
        .exec
        .execute(&policy, move |_client| {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Err::<(), _>(application_fault()) }
        })
        .await
        .unwrap_err();

    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert!(matches!(err, ChainError::Rejected(_)));
    assert_eq!(err.to_string(), "request rejected: insufficient funds");
    // Application faults never moved the cursor.
    assert_eq!(h.exec.endpoint_index(), 0);
}
