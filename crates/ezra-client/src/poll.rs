// ============================================================================
// EZRA Client - Signature Polling
// File: crates/ezra-client/src/poll.rs
// ============================================================================
//! Bounded, cancellable polling. Used by the tenant portal to watch for the
//! backend noticing a completed signature.

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::interval;
use tracing::{debug, warn};

use ezra_core::LeaseStatus;

use crate::error::ApiError;
use crate::leases::LeaseClient;
use crate::tenant::TenantLeaseStatus;

#[derive(Debug, Clone, Copy)]
pub struct PollConfig {
    pub interval: Duration,
    pub max_attempts: u32,
    /// Consecutive errors tolerated before giving up. Resets on any
    /// successful probe.
    pub error_threshold: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self { interval: Duration::from_secs(5), max_attempts: 60, error_threshold: 3 }
    }
}

#[derive(Debug)]
pub enum PollOutcome<T> {
    Completed(T),
    MaxAttempts,
    ErrorLimit(ApiError),
    Cancelled,
}

/// Runs `probe` on a fixed interval until it yields a value, the attempt or
/// error budget runs out, or `cancel` flips to true. Dropping the cancel
/// sender does not cancel; the poll runs to its attempt budget.
pub async fn poll_until<T, F, Fut>(
    config: PollConfig,
    mut cancel: watch::Receiver<bool>,
    mut probe: F,
) -> PollOutcome<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>, ApiError>>,
{
    if *cancel.borrow() {
        return PollOutcome::Cancelled;
    }
    let cancelled = async {
        loop {
            if cancel.changed().await.is_err() {
                // Sender gone; cancellation can no longer arrive.
                std::future::pending::<()>().await;
            }
            if *cancel.borrow() {
                return;
            }
        }
    };
    tokio::pin!(cancelled);

    let mut ticker = interval(config.interval);
    let mut errors = 0u32;
    for attempt in 1..=config.max_attempts {
        tokio::select! {
            _ = &mut cancelled => return PollOutcome::Cancelled,
            _ = ticker.tick() => {}
        }
        match probe().await {
            Ok(Some(value)) => return PollOutcome::Completed(value),
            Ok(None) => {
                errors = 0;
                debug!(attempt, "poll probe still pending");
            }
            Err(err) => {
                errors += 1;
                warn!(attempt, errors, error = %err, "poll probe failed");
                if errors >= config.error_threshold {
                    return PollOutcome::ErrorLimit(err);
                }
            }
        }
    }
    PollOutcome::MaxAttempts
}

impl LeaseClient {
    /// Watches a tenant's lease until it leaves pending approval, meaning the
    /// signature round-trip finished (or the lease was cancelled under them).
    pub async fn await_signature(
        &self,
        user_id: i64,
        config: PollConfig,
        cancel: watch::Receiver<bool>,
    ) -> PollOutcome<TenantLeaseStatus> {
        poll_until(config, cancel, || async move {
            let status = self.lease_status_for(user_id, true).await?;
            if status.status == LeaseStatus::PendingApproval {
                Ok(None)
            } else {
                Ok(Some(status.as_ref().clone()))
            }
        })
        .await
    }
}
