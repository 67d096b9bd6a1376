//! Quorum CLI - Main entry point

use clap::{Parser, Subcommand};
use quorum_rpc::{commands, AppContext};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quorum")]
#[command(about = "Quorum - multi-party authorization wallet", long_about = None)]
struct Cli {
    /// Data directory path
    #[arg(short, long, default_value = "./data")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the wallet with its owner set and threshold
    Init {
        /// Owner identifier (repeat once per owner)
        #[arg(long = "owner", required = true)]
        owners: Vec<String>,
        /// Confirmations required before execution
        #[arg(long)]
        threshold: usize,
    },

    /// Propose a transaction
    Submit {
        /// Calling owner
        caller: String,
        /// Dispatch destination
        target: String,
        /// Value forwarded to the target
        value: Decimal,
        /// Optional hex-encoded call data
        payload: Option<String>,
    },

    /// Confirm a pending transaction
    Confirm {
        /// Calling owner
        caller: String,
        /// Transaction id
        id: u64,
    },

    /// Withdraw a prior confirmation
    Revoke {
        /// Calling owner
        caller: String,
        /// Transaction id
        id: u64,
    },

    /// Execute a transaction that has reached quorum
    Execute {
        /// Calling owner
        caller: String,
        /// Transaction id
        id: u64,
    },

    /// Show one transaction
    Show {
        /// Transaction id
        id: u64,
    },

    /// List all transactions
    List,

    /// Show the owner set and threshold
    Owners,

    /// Print the journaled event log
    Log,
}

fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { owners, threshold } => {
            commands::init(&cli.data, &owners, threshold)?;
        }

        Commands::Submit {
            caller,
            target,
            value,
            payload,
        } => {
            let mut ctx = AppContext::open(&cli.data)?;
            commands::submit(&mut ctx, &caller, &target, value, payload.as_deref())?;
        }

        Commands::Confirm { caller, id } => {
            let mut ctx = AppContext::open(&cli.data)?;
            commands::confirm(&mut ctx, &caller, id)?;
        }

        Commands::Revoke { caller, id } => {
            let mut ctx = AppContext::open(&cli.data)?;
            commands::revoke(&mut ctx, &caller, id)?;
        }

        Commands::Execute { caller, id } => {
            let mut ctx = AppContext::open(&cli.data)?;
            commands::execute(&mut ctx, &caller, id)?;
        }

        Commands::Show { id } => {
            let ctx = AppContext::open(&cli.data)?;
            commands::show(&ctx, id)?;
        }

        Commands::List => {
            let ctx = AppContext::open(&cli.data)?;
            commands::list(&ctx)?;
        }

        Commands::Owners => {
            let ctx = AppContext::open(&cli.data)?;
            commands::owners(&ctx)?;
        }

        Commands::Log => {
            let ctx = AppContext::open(&cli.data)?;
            commands::log(&ctx)?;
        }
    }

    Ok(())
}
