// ============================================================================
// EZRA Client - Operation Tracking
// File: crates/ezra-client/src/ops.rs
// ============================================================================
//! Per-operation tri-state tracking (`idle | loading | success | error`).
//!
//! While an operation is loading, re-invoking it is refused before any
//! request is built, which is the client's only concurrency control:
//! a single user cannot double-submit, races between sessions are the
//! backend's problem.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use ezra_shared::constants::SUCCESS_AUTO_CLOSE_MS;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Create,
    Send,
    Renew,
    Amend,
    Terminate,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OpState {
    #[default]
    Idle,
    Loading,
    Success,
    Failed(String),
}

#[derive(Default)]
pub struct OpRegistry {
    cells: Mutex<HashMap<OpKind, OpState>>,
}

impl OpRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, kind: OpKind) -> OpState {
        self.cells
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(&kind)
            .cloned()
            .unwrap_or_default()
    }

    /// User-initiated "try again": clears a terminal state back to idle.
    /// A loading operation cannot be reset.
    pub fn reset(&self, kind: OpKind) {
        let mut cells = self.cells.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        if cells.get(&kind) != Some(&OpState::Loading) {
            cells.insert(kind, OpState::Idle);
        }
    }

    /// UI-driven auto-close: after the confirmation has been on screen long
    /// enough to read, a success cell clears back to idle. A state that moved
    /// on in the meantime is left alone.
    pub async fn clear_after_success(&self, kind: OpKind) {
        tokio::time::sleep(Duration::from_millis(SUCCESS_AUTO_CLOSE_MS)).await;
        let mut cells = self.cells.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        if cells.get(&kind) == Some(&OpState::Success) {
            cells.insert(kind, OpState::Idle);
        }
    }

    /// Claim the operation. Fails with [`ApiError::OperationInFlight`] if it
    /// is already loading; the caller must bail before touching the network.
    pub(crate) fn begin(&self, kind: OpKind) -> Result<OpGuard<'_>, ApiError> {
        let mut cells = self.cells.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        if cells.get(&kind) == Some(&OpState::Loading) {
            return Err(ApiError::OperationInFlight);
        }
        cells.insert(kind, OpState::Loading);
        Ok(OpGuard { registry: self, kind, settled: false })
    }

    fn settle(&self, kind: OpKind, state: OpState) {
        self.cells.lock().unwrap_or_else(std::sync::PoisonError::into_inner).insert(kind, state);
    }
}

/// Holds the loading claim until the operation settles. Dropping the guard
/// without settling (the future was abandoned mid-flight) returns the cell
/// to idle so the operation can be re-invoked.
pub(crate) struct OpGuard<'a> {
    registry: &'a OpRegistry,
    kind: OpKind,
    settled: bool,
}

impl OpGuard<'_> {
    pub(crate) fn succeed(mut self) {
        self.settled = true;
        self.registry.settle(self.kind, OpState::Success);
    }

    pub(crate) fn fail(mut self, message: String) {
        self.settled = true;
        self.registry.settle(self.kind, OpState::Failed(message));
    }
}

impl Drop for OpGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.registry.settle(self.kind, OpState::Idle);
        }
    }
}
