// ============================================================================
// EZRA Core - Lease Status Resolver
// File: crates/ezra-core/src/status.rs
// ============================================================================
//! Effective display status, derived from stored status plus the end date.
//!
//! Stored `terminated`, `draft`, and `pending_approval` are authoritative and
//! pass through untouched. Everything else is time-derived against an
//! injected `today`, so callers stay deterministic under test.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::LeaseStatus;

/// Leases ending within this many days (inclusive) of today display as
/// expiring soon.
pub const EXPIRES_SOON_WINDOW_DAYS: i64 = 60;

/// Status shown to users. Distinct from [`LeaseStatus`]: `ExpiresSoon` never
/// exists in storage, and a stored `active` lease past its end date displays
/// as expired even before the backend's expiry sweep catches up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayStatus {
    Draft,
    PendingApproval,
    Active,
    ExpiresSoon,
    Expired,
    Terminated,
}

impl DisplayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayStatus::Draft => "draft",
            DisplayStatus::PendingApproval => "pending_approval",
            DisplayStatus::Active => "active",
            DisplayStatus::ExpiresSoon => "expires_soon",
            DisplayStatus::Expired => "expired",
            DisplayStatus::Terminated => "terminated",
        }
    }

    /// Human label for tables and alerts.
    pub fn label(&self) -> &'static str {
        match self {
            DisplayStatus::Draft => "Draft",
            DisplayStatus::PendingApproval => "Pending Approval",
            DisplayStatus::Active => "Active",
            DisplayStatus::ExpiresSoon => "Expiring Soon",
            DisplayStatus::Expired => "Expired",
            DisplayStatus::Terminated => "Terminated",
        }
    }
}

impl From<LeaseStatus> for DisplayStatus {
    /// Stored status as-is, with no date derivation. Used when a record
    /// carries no end date to resolve against.
    fn from(stored: LeaseStatus) -> Self {
        match stored {
            LeaseStatus::Draft => DisplayStatus::Draft,
            LeaseStatus::PendingApproval => DisplayStatus::PendingApproval,
            LeaseStatus::Active => DisplayStatus::Active,
            LeaseStatus::Expired => DisplayStatus::Expired,
            LeaseStatus::Terminated => DisplayStatus::Terminated,
        }
    }
}

/// Resolve the effective display status of a lease.
///
/// Pure and total: no I/O, no clock access. The `expires_soon` boundary is
/// inclusive, so a lease ending exactly 60 days from `today` is already
/// expiring soon.
///
/// Stored `active` and `expired` are re-derived identically: the backend's
/// expiry sweep lags the calendar in both directions, so for those two the
/// end date, not the stored stamp, decides what users see. A stored
/// `expired` whose end date was pushed into the future displays as active
/// or expiring soon again.
pub fn resolve_status(stored: LeaseStatus, end_date: NaiveDate, today: NaiveDate) -> DisplayStatus {
    match stored {
        LeaseStatus::Terminated => DisplayStatus::Terminated,
        LeaseStatus::Draft => DisplayStatus::Draft,
        LeaseStatus::PendingApproval => DisplayStatus::PendingApproval,
        LeaseStatus::Active | LeaseStatus::Expired => {
            if end_date < today {
                return DisplayStatus::Expired;
            }
            let remaining = end_date.signed_duration_since(today).num_days();
            if remaining <= EXPIRES_SOON_WINDOW_DAYS {
                DisplayStatus::ExpiresSoon
            } else {
                DisplayStatus::Active
            }
        }
    }
}
