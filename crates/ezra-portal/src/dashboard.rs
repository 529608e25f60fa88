// ============================================================================
// EZRA Portal - Lease Card Views
// File: crates/ezra-portal/src/dashboard.rs
// ============================================================================
//! Per-lease presentation for the admin table: which badge each row wears
//! and which actions its card offers, derived from the display status.

use chrono::NaiveDate;

use ezra_client::LeaseSummary;
use ezra_core::{DisplayStatus, EXPIRES_SOON_WINDOW_DAYS};
use ezra_shared::constants::DATE_FORMAT;

/// Actions a lease card can offer; one card may carry several.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaseCardAction {
    SendForSignature,
    ViewDocument,
    Renew,
    Amend,
    Terminate,
    CancelDraft,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaseCardView {
    pub badge: &'static str,
    pub actions: Vec<LeaseCardAction>,
    pub expiry_notice: Option<ExpiryNotice>,
    /// Rent formatted for display, e.g. `$1,500.00`.
    pub rent_display: String,
}

/// Countdown copy shown when a lease enters the renewal window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpiryNotice {
    pub days_remaining: i64,
    pub message: String,
}

impl ExpiryNotice {
    fn for_lease(end_date: NaiveDate, today: NaiveDate) -> Self {
        let days_remaining = (end_date - today).num_days();
        let date = end_date.format(DATE_FORMAT);
        let message = match days_remaining {
            0 => "Lease expires today. Renew now to avoid a gap.".to_string(),
            1 => "Lease expires tomorrow. Renew now to avoid a gap.".to_string(),
            n => format!("Lease expires in {n} days ({date}). Consider starting a renewal."),
        };
        Self { days_remaining, message }
    }
}

impl LeaseCardView {
    pub fn for_lease(lease: &LeaseSummary, today: NaiveDate) -> Self {
        let (badge, actions, expiry_notice) = match lease.display_status(today) {
            DisplayStatus::Draft => (
                "Draft",
                vec![LeaseCardAction::SendForSignature, LeaseCardAction::CancelDraft],
                None,
            ),
            DisplayStatus::PendingApproval => (
                "Pending Approval",
                vec![LeaseCardAction::SendForSignature, LeaseCardAction::CancelDraft],
                None,
            ),
            DisplayStatus::Active => (
                "Active",
                vec![
                    LeaseCardAction::ViewDocument,
                    LeaseCardAction::Amend,
                    LeaseCardAction::Terminate,
                ],
                None,
            ),
            DisplayStatus::ExpiresSoon => (
                "Expiring Soon",
                vec![
                    LeaseCardAction::ViewDocument,
                    LeaseCardAction::Renew,
                    LeaseCardAction::Amend,
                    LeaseCardAction::Terminate,
                ],
                Some(ExpiryNotice::for_lease(lease.end_date, today)),
            ),
            DisplayStatus::Expired => (
                "Expired",
                vec![LeaseCardAction::ViewDocument, LeaseCardAction::Renew],
                None,
            ),
            DisplayStatus::Terminated => {
                ("Terminated", vec![LeaseCardAction::ViewDocument], None)
            }
        };
        Self { badge, actions, expiry_notice, rent_display: lease.rent_amount.display_usd() }
    }
}
