//! CLI commands

use crate::context::AppContext;
use quorum_core::{Amount, OwnerId, Payload, TargetId};
use quorum_events::EventReader;
use quorum_wallet::WalletEvent;
use rust_decimal::Decimal;
use std::path::Path;

/// Initialize a wallet with its owner set and threshold
pub fn init(data_dir: &Path, owners: &[String], threshold: usize) -> Result<(), anyhow::Error> {
    let owners = owners
        .iter()
        .map(|id| id.parse::<OwnerId>())
        .collect::<Result<Vec<_>, _>>()?;

    let config = AppContext::init(data_dir, owners, threshold)?;

    println!(
        "✅ Wallet initialized: {} owners, {} confirmations required",
        config.owners.len(),
        config.threshold
    );
    for owner in &config.owners {
        println!("   owner: {}", owner);
    }
    Ok(())
}

/// Propose a transaction
pub fn submit(
    ctx: &mut AppContext,
    caller: &str,
    target: &str,
    value: Decimal,
    payload_hex: Option<&str>,
) -> Result<(), anyhow::Error> {
    let caller: OwnerId = caller.parse()?;
    let target: TargetId = target.parse()?;
    let value = Amount::new(value)?;
    let payload = match payload_hex {
        Some(hex) => Payload::from_hex(hex)?,
        None => Payload::empty(),
    };

    let id = ctx.submit(&caller, target, value, payload)?;

    println!(
        "✅ Submitted transaction {} ({} confirmations required)",
        id,
        ctx.engine().required_confirmations()
    );
    Ok(())
}

/// Confirm a pending transaction
pub fn confirm(ctx: &mut AppContext, caller: &str, id: u64) -> Result<(), anyhow::Error> {
    let caller: OwnerId = caller.parse()?;
    ctx.confirm(&caller, id)?;

    let tx = ctx.engine().transaction(id)?;
    println!(
        "✅ Confirmed transaction {} ({} of {} confirmations)",
        id,
        tx.confirmation_count(),
        ctx.engine().required_confirmations()
    );
    Ok(())
}

/// Withdraw a prior confirmation
pub fn revoke(ctx: &mut AppContext, caller: &str, id: u64) -> Result<(), anyhow::Error> {
    let caller: OwnerId = caller.parse()?;
    ctx.revoke(&caller, id)?;

    let tx = ctx.engine().transaction(id)?;
    println!(
        "✅ Revoked confirmation on transaction {} ({} of {} confirmations)",
        id,
        tx.confirmation_count(),
        ctx.engine().required_confirmations()
    );
    Ok(())
}

/// Execute a transaction that has reached quorum
pub fn execute(ctx: &mut AppContext, caller: &str, id: u64) -> Result<(), anyhow::Error> {
    let caller: OwnerId = caller.parse()?;
    ctx.execute(&caller, id)?;

    let tx = ctx.engine().transaction(id)?;
    println!(
        "✅ Executed transaction {} -> {} (value {})",
        id, tx.target, tx.value
    );
    Ok(())
}

/// Show one transaction
pub fn show(ctx: &AppContext, id: u64) -> Result<(), anyhow::Error> {
    let engine = ctx.engine();
    let tx = engine.transaction(id)?;

    println!("Transaction {}", tx.id);
    println!("  target:        {}", tx.target);
    println!("  value:         {}", tx.value);
    println!("  payload:       {}", tx.payload);
    println!("  submitted by:  {} at {}", tx.submitted_by, tx.submitted_at);
    println!("  state:         {:?}", engine.state(id)?);
    println!(
        "  confirmations: {} of {}",
        tx.confirmation_count(),
        engine.required_confirmations()
    );
    for owner in &tx.confirmed {
        println!("    confirmed by: {}", owner);
    }
    Ok(())
}

/// List all transactions
pub fn list(ctx: &AppContext) -> Result<(), anyhow::Error> {
    let engine = ctx.engine();

    if engine.transaction_count() == 0 {
        println!("No transactions submitted");
        return Ok(());
    }

    for tx in engine.transactions() {
        println!(
            "{:>4}  {:<24} {:>12}  {}/{}  {:?}",
            tx.id,
            tx.target.as_str(),
            tx.value.to_string(),
            tx.confirmation_count(),
            engine.required_confirmations(),
            tx.state(engine.required_confirmations()),
        );
    }
    Ok(())
}

/// Show the owner set and threshold
pub fn owners(ctx: &AppContext) -> Result<(), anyhow::Error> {
    let engine = ctx.engine();

    println!(
        "{} owners, {} confirmations required",
        engine.owners().len(),
        engine.required_confirmations()
    );
    for owner in engine.owners() {
        println!("  {}", owner);
    }
    Ok(())
}

/// Print the journaled event log
pub fn log(ctx: &AppContext) -> Result<(), anyhow::Error> {
    let records = EventReader::open(ctx.journal_dir())?.read_all()?;

    if records.is_empty() {
        println!("Journal is empty");
        return Ok(());
    }

    for record in records {
        let line = match &record.event {
            WalletEvent::Submitted {
                id,
                caller,
                target,
                value,
                payload,
                ..
            } => format!(
                "Submitted  tx={} caller={} target={} value={} payload={}",
                id, caller, target, value, payload
            ),
            WalletEvent::Confirmed { id, caller, .. } => {
                format!("Confirmed  tx={} caller={}", id, caller)
            }
            WalletEvent::Revoked { id, caller, .. } => {
                format!("Revoked    tx={} caller={}", id, caller)
            }
            WalletEvent::Executed {
                id,
                caller,
                target,
                value,
                ..
            } => format!(
                "Executed   tx={} caller={} target={} value={}",
                id, caller, target, value
            ),
        };
        println!("{:>4}  {}  {}", record.sequence, record.recorded_at, line);
    }
    Ok(())
}
