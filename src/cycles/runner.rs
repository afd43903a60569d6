//! Cycle orchestration.
//!
//! Runs the selected protocol for a number of cycles. One cycle is a small
//! scripted sequence of transactions (stake then unstake, wrap then unwrap)
//! with randomized amounts and waits. A failed cycle is logged and the run
//! moves on to the next one; only setup errors abort the whole run.

use alloy::primitives::utils::format_ether;
use alloy::primitives::{TxHash, U256};
use std::time::Duration;
use tokio::time::sleep;

use crate::chain::client::ChainClient;
use crate::chain::transaction::TxSender;
use crate::chain::types::{ChainError, ChainResult, ConfirmationStatus};
use crate::config::BotConfig;
use crate::cycles::schedule;
use crate::protocols::{apriori, magma, wmon, ContractAddresses, Protocol};
use crate::resilience::FailoverExecutor;

/// What to run and how often.
#[derive(Debug, Clone, Copy)]
pub struct RunPlan {
    pub protocol: Protocol,
    pub cycles: u32,
    /// Fixed hours between cycles; overrides the random inter-cycle delay.
    pub interval_hours: Option<u64>,
}

/// Drives timed cycles for one protocol against one wallet.
pub struct CycleRunner {
    exec: FailoverExecutor<ChainClient>,
    sender: TxSender,
    addresses: ContractAddresses,
    config: BotConfig,
}

impl CycleRunner {
    pub fn new(
        exec: FailoverExecutor<ChainClient>,
        sender: TxSender,
        addresses: ContractAddresses,
        config: BotConfig,
    ) -> Self {
        Self {
            exec,
            sender,
            addresses,
            config,
        }
    }

    /// Run the plan to completion. Individual cycle failures do not abort
    /// the run.
    pub async fn run(&mut self, plan: RunPlan) {
        tracing::info!(
            protocol = %plan.protocol,
            cycles = plan.cycles,
            "Starting cycle run"
        );

        for cycle in 1..=plan.cycles {
            tracing::info!(cycle, total = plan.cycles, "=== Starting cycle ===");
            match self.run_cycle(plan.protocol).await {
                Ok(()) => tracing::info!(cycle, "=== Cycle completed ==="),
                Err(err) => tracing::error!(cycle, error = %err, "Cycle failed"),
            }

            if cycle < plan.cycles {
                let delay = match plan.interval_hours {
                    Some(hours) => Duration::from_secs(hours * 3600),
                    None => schedule::random_delay(&self.config.cycle),
                };
                tracing::info!(secs = delay.as_secs(), "Waiting before next cycle");
                sleep(delay).await;
            }
        }

        tracing::info!(cycles = plan.cycles, "All cycles completed");
    }

    async fn run_cycle(&mut self, protocol: Protocol) -> ChainResult<()> {
        let amount = schedule::random_amount(&self.config.cycle)?;
        match protocol {
            Protocol::Magma => self.magma_cycle(amount).await,
            Protocol::Apriori => self.apriori_cycle(amount).await,
            Protocol::Wmon => self.wmon_cycle(amount).await,
        }
    }

    /// Stake MON into Magma, wait, unstake the same amount of gMON.
    async fn magma_cycle(&mut self, amount: U256) -> ChainResult<()> {
        let to = self.addresses.magma;

        tracing::info!(amount = %format_ether(amount), "Staking MON");
        let hash = self
            .sender
            .send(
                &mut self.exec,
                to,
                amount,
                magma::stake_calldata(),
                self.config.gas.stake_limit,
            )
            .await?;
        self.confirm(hash).await?;

        let delay = schedule::random_delay(&self.config.cycle);
        tracing::info!(secs = delay.as_secs(), "Waiting before unstaking");
        sleep(delay).await;

        tracing::info!(amount = %format_ether(amount), "Unstaking gMON");
        let hash = self
            .sender
            .send(
                &mut self.exec,
                to,
                U256::ZERO,
                magma::unstake_calldata(amount),
                self.config.gas.unstake_limit,
            )
            .await?;
        self.confirm(hash).await
    }

    /// Deposit MON into the aPriori vault.
    async fn apriori_cycle(&mut self, amount: U256) -> ChainResult<()> {
        tracing::info!(amount = %format_ether(amount), "Depositing MON into aPriori");
        let data = apriori::stake_calldata(amount, self.sender.address());
        let hash = self
            .sender
            .send(
                &mut self.exec,
                self.addresses.apriori,
                amount,
                data,
                self.config.gas.stake_limit,
            )
            .await?;
        self.confirm(hash).await
    }

    /// Wrap MON into WMON, then unwrap it straight back.
    async fn wmon_cycle(&mut self, amount: U256) -> ChainResult<()> {
        let to = self.addresses.wmon;

        tracing::info!(amount = %format_ether(amount), "Wrapping MON into WMON");
        let hash = self
            .sender
            .send(
                &mut self.exec,
                to,
                amount,
                wmon::wrap_calldata(),
                self.config.gas.stake_limit,
            )
            .await?;
        self.confirm(hash).await?;

        tracing::info!(amount = %format_ether(amount), "Unwrapping WMON back to MON");
        let hash = self
            .sender
            .send(
                &mut self.exec,
                to,
                U256::ZERO,
                wmon::unwrap_calldata(amount),
                self.config.gas.stake_limit,
            )
            .await?;
        self.confirm(hash).await
    }

    async fn confirm(&mut self, hash: TxHash) -> ChainResult<()> {
        let status = self
            .sender
            .wait_for_confirmation(&mut self.exec, hash, self.config.rpc.confirm_timeout_secs)
            .await?;
        match status {
            ConfirmationStatus::Confirmed { block_number } => {
                tracing::info!(tx_hash = %hash, block_number, "Transaction confirmed");
                Ok(())
            }
            ConfirmationStatus::Failed(reason) => Err(ChainError::Reverted(reason)),
        }
    }
}
