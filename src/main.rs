//! Monad testnet cycle runner.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────┐
//!   │                        CYCLE RUNNER                          │
//!   │                                                              │
//!   │  ┌───────┐   ┌────────┐   ┌───────────┐   ┌──────────────┐  │
//!   │  │  cli  │──▶│  gate  │──▶│  cycles   │──▶│  protocols   │  │
//!   │  │ menu  │   │  NFT   │   │  runner   │   │ magma/aprio/ │  │
//!   │  └───────┘   └────────┘   └───────────┘   │     wmon     │  │
//!   │                                           └──────┬───────┘  │
//!   │                                                  ▼          │
//!   │  ┌────────────────────────────────────────────────────────┐ │
//!   │  │                   chain (wallet / tx)                  │ │
//!   │  │        build → sign → broadcast → confirm              │ │
//!   │  └──────────────────────────┬─────────────────────────────┘ │
//!   │                             ▼                               │
//!   │  ┌────────────────────────────────────────────────────────┐ │
//!   │  │            resilience (failover executor)              │ │
//!   │  │   retry + backoff + endpoint rotation over the pool    │ │
//!   │  └────────────────────────────────────────────────────────┘ │
//!   └──────────────────────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use monad_cycler::chain::{ChainClient, TxSender, Wallet};
use monad_cycler::cli::{self, Cli};
use monad_cycler::config::{load_config, BotConfig};
use monad_cycler::cycles::CycleRunner;
use monad_cycler::gate::NftGate;
use monad_cycler::protocols::ContractAddresses;
use monad_cycler::resilience::{EndpointPool, FailoverExecutor, RetryPolicy};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "monad_cycler=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Cli::parse();
    cli::banner();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => BotConfig::default(),
    };
    tracing::info!(
        endpoints = config.rpc.endpoints.len(),
        chain_id = config.rpc.chain_id,
        "Configuration loaded"
    );

    let pool = EndpointPool::from_strings(&config.rpc.endpoints)?;
    let rpc_timeout = Duration::from_secs(config.rpc.rpc_timeout_secs);
    let mut exec =
        FailoverExecutor::new(pool, move |url| ChainClient::connect(url, rpc_timeout));
    let policy = RetryPolicy::from(&config.retry);

    let wallet = match &config.wallet.keys_file {
        Some(path) => Wallet::from_keys_file(path, config.rpc.chain_id)?,
        None => Wallet::from_env(config.rpc.chain_id)?,
    };
    tracing::info!(address = %wallet.address(), "Using wallet");

    // Verify the pool actually serves the configured chain. A mismatch is
    // loud but not fatal; the signer still refuses foreign-chain replays.
    match exec
        .execute(&policy, |client| async move { client.chain_id().await })
        .await
    {
        Ok(actual) if actual != config.rpc.chain_id => {
            tracing::warn!(
                expected = config.rpc.chain_id,
                actual,
                "Chain ID mismatch between configuration and endpoint"
            );
        }
        Ok(_) => {}
        Err(err) => {
            tracing::warn!(error = %err, "Chain verification failed");
        }
    }

    if config.gate.enabled {
        let collection = config
            .gate
            .collection
            .parse()
            .map_err(|e| format!("invalid gate collection address: {}", e))?;
        let gate = NftGate::new(collection);
        if !gate.verify(&mut exec, &policy, wallet.address()).await? {
            tracing::error!("Your wallet does not have the required NFT");
            std::process::exit(1);
        }
    }

    let Some(plan) = cli::resolve_plan(args.command)? else {
        tracing::info!("Exiting");
        return Ok(());
    };

    let addresses = ContractAddresses::from_config(&config.contracts)?;
    let sender = TxSender::new(wallet, &config);
    let mut runner = CycleRunner::new(exec, sender, addresses, config);
    runner.run(plan).await;

    Ok(())
}
