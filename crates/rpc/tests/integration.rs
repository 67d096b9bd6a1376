//! Integration tests for Quorum
//!
//! These tests verify the complete flow from orchestration through
//! engine, journal, and outbox: initialize, submit, gather
//! confirmations, execute, and rebuild state from the journal.

use quorum_core::{Amount, OwnerId, Payload, TargetId};
use quorum_events::EventReader;
use quorum_rpc::AppContext;
use quorum_wallet::{TxState, WalletError};
use rust_decimal_macros::dec;
use std::path::Path;
use tempfile::TempDir;

fn owner(id: &str) -> OwnerId {
    id.parse().unwrap()
}

fn target(id: &str) -> TargetId {
    id.parse().unwrap()
}

fn init_two_owner_wallet(data_dir: &Path) -> AppContext {
    AppContext::init(data_dir, vec![owner("alice"), owner("bob")], 2).unwrap();
    AppContext::open(data_dir).unwrap()
}

/// Test: init → submit → confirm ×2 → execute → outbox record
#[test]
fn test_full_quorum_workflow() {
    let temp_dir = TempDir::new().unwrap();
    let mut ctx = init_two_owner_wallet(temp_dir.path());

    let id = ctx
        .submit(
            &owner("alice"),
            target("greeter"),
            Amount::new(dec!(0)).unwrap(),
            Payload::from_hex("2e7700f0").unwrap(),
        )
        .unwrap();
    assert_eq!(id, 0);
    assert_eq!(ctx.engine().transaction_count(), 1);

    ctx.confirm(&owner("alice"), id).unwrap();

    // One confirmation short of quorum
    let err = ctx.execute(&owner("alice"), id).unwrap_err();
    assert_eq!(
        err.downcast_ref::<WalletError>(),
        Some(&WalletError::InsufficientConfirmations {
            id,
            have: 1,
            need: 2
        })
    );
    assert!(ctx.outbox().read_all().unwrap().is_empty());

    ctx.confirm(&owner("bob"), id).unwrap();
    ctx.execute(&owner("alice"), id).unwrap();

    assert!(ctx.engine().transaction(id).unwrap().executed);
    assert_eq!(ctx.engine().state(id).unwrap(), TxState::Executed);

    let dispatched = ctx.outbox().read_all().unwrap();
    assert_eq!(dispatched.len(), 1);
    assert_eq!(dispatched[0].target, target("greeter"));
    assert_eq!(dispatched[0].payload, Payload::from_hex("2e7700f0").unwrap());
}

/// Test: journal replay rebuilds engine state without re-dispatching
#[test]
fn test_state_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();

    {
        let mut ctx = init_two_owner_wallet(temp_dir.path());
        let id = ctx
            .submit(
                &owner("alice"),
                target("greeter"),
                Amount::new(dec!(250)).unwrap(),
                Payload::empty(),
            )
            .unwrap();
        ctx.confirm(&owner("alice"), id).unwrap();
        ctx.confirm(&owner("bob"), id).unwrap();
        ctx.execute(&owner("bob"), id).unwrap();
    }

    let ctx = AppContext::open(temp_dir.path()).unwrap();
    let engine = ctx.engine();

    assert_eq!(engine.owners(), &[owner("alice"), owner("bob")]);
    assert_eq!(engine.transaction_count(), 1);

    let tx = engine.transaction(0).unwrap();
    assert!(tx.executed);
    assert_eq!(tx.confirmation_count(), 2);
    assert_eq!(tx.value, Amount::new(dec!(250)).unwrap());

    // Replay must not dispatch the execution a second time
    assert_eq!(ctx.outbox().read_all().unwrap().len(), 1);

    // Submitted, Confirmed, Confirmed, Executed
    let records = EventReader::open(ctx.journal_dir()).unwrap().read_all().unwrap();
    let names: Vec<&str> = records.iter().map(|r| r.event.name()).collect();
    assert_eq!(names, vec!["Submitted", "Confirmed", "Confirmed", "Executed"]);
}

/// Test: revocation is journaled and survives reopen
#[test]
fn test_revoke_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();

    {
        let mut ctx = init_two_owner_wallet(temp_dir.path());
        let id = ctx
            .submit(
                &owner("alice"),
                target("vault"),
                Amount::new(dec!(10)).unwrap(),
                Payload::empty(),
            )
            .unwrap();
        ctx.confirm(&owner("alice"), id).unwrap();
        ctx.revoke(&owner("alice"), id).unwrap();
    }

    let ctx = AppContext::open(temp_dir.path()).unwrap();
    let tx = ctx.engine().transaction(0).unwrap();

    assert_eq!(tx.confirmation_count(), 0);
    assert_eq!(ctx.engine().state(0).unwrap(), TxState::Pending);
}

/// Test: non-owners are rejected at the orchestration boundary too
#[test]
fn test_outsider_denied() {
    let temp_dir = TempDir::new().unwrap();
    let mut ctx = init_two_owner_wallet(temp_dir.path());

    let id = ctx
        .submit(
            &owner("alice"),
            target("greeter"),
            Amount::new(dec!(0)).unwrap(),
            Payload::empty(),
        )
        .unwrap();

    let err = ctx.confirm(&owner("carol"), id).unwrap_err();
    assert_eq!(
        err.downcast_ref::<WalletError>(),
        Some(&WalletError::AccessDenied {
            caller: owner("carol")
        })
    );

    let err = ctx.execute(&owner("carol"), id).unwrap_err();
    assert_eq!(
        err.downcast_ref::<WalletError>(),
        Some(&WalletError::AccessDenied {
            caller: owner("carol")
        })
    );

    // Nothing journaled for the rejected calls
    let records = EventReader::open(ctx.journal_dir()).unwrap().read_all().unwrap();
    assert_eq!(records.len(), 1);
}

/// Test: invalid configurations never touch the data directory
#[test]
fn test_init_rejects_invalid_config() {
    let temp_dir = TempDir::new().unwrap();

    // Threshold above owner count
    let result = AppContext::init(temp_dir.path(), vec![owner("alice")], 2);
    assert!(result.is_err());

    // No config was written, so the wallet stays uninitialized
    assert!(AppContext::open(temp_dir.path()).is_err());
}

/// Test: the owner set is fixed once initialized
#[test]
fn test_double_init_rejected() {
    let temp_dir = TempDir::new().unwrap();

    AppContext::init(temp_dir.path(), vec![owner("alice")], 1).unwrap();
    let result = AppContext::init(temp_dir.path(), vec![owner("bob")], 1);
    assert!(result.is_err());
}

/// Test: executed transactions stay frozen across restarts
#[test]
fn test_executed_stays_frozen_after_reopen() {
    let temp_dir = TempDir::new().unwrap();

    {
        AppContext::init(temp_dir.path(), vec![owner("alice")], 1).unwrap();
        let mut ctx = AppContext::open(temp_dir.path()).unwrap();
        let id = ctx
            .submit(
                &owner("alice"),
                target("greeter"),
                Amount::new(dec!(1)).unwrap(),
                Payload::empty(),
            )
            .unwrap();
        ctx.confirm(&owner("alice"), id).unwrap();
        ctx.execute(&owner("alice"), id).unwrap();
    }

    let mut ctx = AppContext::open(temp_dir.path()).unwrap();

    let err = ctx.execute(&owner("alice"), 0).unwrap_err();
    assert_eq!(
        err.downcast_ref::<WalletError>(),
        Some(&WalletError::AlreadyExecuted(0))
    );
    let err = ctx.confirm(&owner("alice"), 0).unwrap_err();
    assert_eq!(
        err.downcast_ref::<WalletError>(),
        Some(&WalletError::AlreadyExecuted(0))
    );
}
