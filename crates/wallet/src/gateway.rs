//! Execution gateway - dispatch seam to the host environment
//!
//! The engine hands `(target, value, payload)` to the gateway once a
//! transaction has reached quorum. Any non-success result is treated as
//! total failure: the gateway must not leave partially-applied side
//! effects behind an `Err`.

use quorum_core::{Amount, Payload, TargetId};
use thiserror::Error;

/// Failure reported by an execution gateway
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct GatewayError {
    pub reason: String,
}

impl GatewayError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Dispatches an approved transaction's payload in the host environment.
///
/// Implementations report success or failure; the engine rolls its own
/// state back on failure and never retries on its own.
pub trait ExecutionGateway {
    fn invoke(
        &mut self,
        target: &TargetId,
        value: Amount,
        payload: &Payload,
    ) -> Result<(), GatewayError>;
}

/// Gateway that accepts every dispatch and performs no side effect.
///
/// Used when replaying a journal (executions must not re-fire) and in
/// tests that only exercise the state machine.
#[derive(Debug, Default)]
pub struct NoopGateway;

impl ExecutionGateway for NoopGateway {
    fn invoke(
        &mut self,
        _target: &TargetId,
        _value: Amount,
        _payload: &Payload,
    ) -> Result<(), GatewayError> {
        Ok(())
    }
}
