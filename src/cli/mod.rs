//! Command-line surface.
//!
//! Each protocol is a subcommand; with no subcommand the tool falls back to
//! an interactive menu, prompting for the protocol and cycle count the way
//! a first-time user expects.

use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::cycles::RunPlan;
use crate::protocols::Protocol;

#[derive(Parser)]
#[command(name = "monad-cycler")]
#[command(about = "Automated staking and wrapping cycles on the Monad testnet", long_about = None)]
pub struct Cli {
    /// Path to a TOML configuration file; defaults target the public testnet.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Stake and unstake MON through the Magma staking contract
    Magma {
        /// Number of cycles to run
        #[arg(short = 'n', long)]
        cycles: Option<u32>,
    },
    /// Deposit MON into the aPriori liquid-staking vault
    Apriori {
        /// Number of cycles to run
        #[arg(short = 'n', long)]
        cycles: Option<u32>,
    },
    /// Wrap MON into WMON and unwrap it back
    Wmon {
        /// Number of cycles to run
        #[arg(short = 'n', long)]
        cycles: Option<u32>,

        /// Fixed hours between cycles instead of a random delay
        #[arg(long)]
        interval_hours: Option<u64>,
    },
}

/// Turn the parsed command line into a run plan, prompting for anything
/// missing. Returns `None` when the user chose to exit.
pub fn resolve_plan(command: Option<Command>) -> io::Result<Option<RunPlan>> {
    match command {
        Some(Command::Magma { cycles }) => Ok(Some(RunPlan {
            protocol: Protocol::Magma,
            cycles: resolve_cycles(cycles)?,
            interval_hours: None,
        })),
        Some(Command::Apriori { cycles }) => Ok(Some(RunPlan {
            protocol: Protocol::Apriori,
            cycles: resolve_cycles(cycles)?,
            interval_hours: None,
        })),
        Some(Command::Wmon { cycles, interval_hours }) => Ok(Some(RunPlan {
            protocol: Protocol::Wmon,
            cycles: resolve_cycles(cycles)?,
            interval_hours,
        })),
        None => interactive_plan(),
    }
}

fn resolve_cycles(cycles: Option<u32>) -> io::Result<u32> {
    match cycles {
        Some(n) => Ok(n.max(1)),
        None => prompt_cycle_count(),
    }
}

fn interactive_plan() -> io::Result<Option<RunPlan>> {
    println!("Select the protocol to run:");
    println!("  1) Magma   - stake / unstake MON");
    println!("  2) aPriori - deposit MON");
    println!("  3) WMON    - wrap / unwrap MON");
    println!("  q) Exit");

    let protocol = loop {
        let line = prompt("> ")?;
        match line.trim() {
            "1" => break Protocol::Magma,
            "2" => break Protocol::Apriori,
            "3" => break Protocol::Wmon,
            "q" | "Q" | "exit" => return Ok(None),
            other => println!("Unrecognized choice '{}'", other),
        }
    };

    let cycles = prompt_cycle_count()?;
    Ok(Some(RunPlan {
        protocol,
        cycles,
        interval_hours: None,
    }))
}

fn prompt_cycle_count() -> io::Result<u32> {
    loop {
        let line = prompt("How many cycles would you like to run? (Press enter for 1): ")?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(1);
        }
        match trimmed.parse::<u32>() {
            Ok(n) if n > 0 => return Ok(n),
            _ => println!("Please enter a valid positive number"),
        }
    }
}

fn prompt(message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

/// Startup banner.
pub fn banner() {
    println!(
        r#"
   __  ___                   __  _______          __
  /  |/  /___  ____  ____ _____/ / ____/_  _______/ /__  _____
 / /|_/ / __ \/ __ \/ __ `/ __  / /   / / / / ___/ / _ \/ ___/
/ /  / / /_/ / / / / /_/ / /_/ / /___/ /_/ / /__/ /  __/ /
/_/  /_/\____/_/ /_/\__,_/\__,_/\____/\__, /\___/_/\___/_/
                                     /____/
         Monad testnet cycle runner
"#
    );
}
