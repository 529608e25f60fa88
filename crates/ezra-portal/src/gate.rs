// ============================================================================
// EZRA Portal - Access Gate
// File: crates/ezra-portal/src/gate.rs
// ============================================================================
//! The tenant portal gate.
//!
//! A tenant whose lease is awaiting signature, terminated, or expired is
//! blocked behind a full-screen state with no dismiss affordance; the only
//! ways out are the actions the gate itself offers. The gate re-derives its
//! state from every status observation, so a signature noticed by the poller
//! unblocks the portal on the next observe.

use chrono::NaiveDate;
use tracing::info;

use ezra_client::TenantLeaseStatus;
use ezra_core::{DisplayStatus, LeaseStatus};
use ezra_shared::config::AppConfig;
use ezra_shared::constants::DEFAULT_MANAGEMENT_EMAIL;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateState {
    /// Lease in good standing; dashboard is usable.
    Open,
    /// Signature outstanding. Blocking; offers the signing link when the
    /// backend has issued one.
    SignRequired { signing_url: Option<String> },
    /// Lease terminated by management. Blocking; offers contact only.
    Terminated,
    /// Lease term has lapsed without a renewal. Blocking; offers contact only.
    Expired,
}

impl GateState {
    pub fn is_blocking(&self) -> bool {
        !matches!(self, GateState::Open)
    }

    /// Copy shown on the blocking screen. Open has none.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            GateState::Open => None,
            GateState::SignRequired { .. } => {
                Some("Your lease is ready. Please review and sign it to access your dashboard.")
            }
            GateState::Terminated => Some(
                "Your lease has been terminated. Please contact management for assistance.",
            ),
            GateState::Expired => Some(
                "Your lease has expired. Please contact management about a renewal.",
            ),
        }
    }
}

/// The actions a blocked tenant can take. There is deliberately no
/// "dismiss": a blocking state only clears through a new status observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateAction {
    SignNow { url: String },
    ContactManagement { mailto: String },
}

/// Non-blocking banner for a lease inside the expiring window. The tenant
/// keeps full dashboard access; the banner only suggests reaching out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpiryAdvisory {
    pub days_remaining: i64,
    pub message: String,
    pub action: GateAction,
}

pub struct PortalGate {
    contact_email: String,
    state: GateState,
}

impl PortalGate {
    pub fn new(config: &AppConfig) -> Self {
        Self { contact_email: config.management.contact_email.clone(), state: GateState::Open }
    }

    pub fn with_default_contact() -> Self {
        Self { contact_email: DEFAULT_MANAGEMENT_EMAIL.to_string(), state: GateState::Open }
    }

    pub fn state(&self) -> &GateState {
        &self.state
    }

    /// Folds a fresh lease status into the gate. Draft leases have not been
    /// dispatched to the tenant yet and do not block.
    pub fn observe(&mut self, status: &TenantLeaseStatus, today: NaiveDate) -> &GateState {
        let next = match status.status {
            LeaseStatus::PendingApproval => {
                GateState::SignRequired { signing_url: status.url.clone() }
            }
            LeaseStatus::Terminated => GateState::Terminated,
            LeaseStatus::Expired => GateState::Expired,
            LeaseStatus::Active => match status.display_status(today) {
                DisplayStatus::Expired => GateState::Expired,
                _ => GateState::Open,
            },
            LeaseStatus::Draft => GateState::Open,
        };
        if next != self.state {
            info!(blocking = next.is_blocking(), "portal gate state changed");
            self.state = next;
        }
        &self.state
    }

    /// What the blocked tenant can do right now. An open gate offers nothing.
    pub fn actions(&self) -> Vec<GateAction> {
        match &self.state {
            GateState::Open => Vec::new(),
            GateState::SignRequired { signing_url } => signing_url
                .iter()
                .map(|url| GateAction::SignNow { url: url.clone() })
                .collect(),
            GateState::Terminated | GateState::Expired => {
                vec![GateAction::ContactManagement { mailto: self.mailto() }]
            }
        }
    }

    /// Renewal advisory for a lease nearing its end. Only expiring-soon
    /// leases yield one, and it never blocks.
    pub fn advisory(&self, status: &TenantLeaseStatus, today: NaiveDate) -> Option<ExpiryAdvisory> {
        let end = status.end_date?;
        if status.display_status(today) != DisplayStatus::ExpiresSoon {
            return None;
        }
        let days_remaining = (end - today).num_days();
        let message = match days_remaining {
            0 => "Your lease ends today. Contact management to discuss a renewal.".to_string(),
            1 => "Your lease ends tomorrow. Contact management to discuss a renewal.".to_string(),
            n => format!("Your lease ends in {n} days. Contact management to discuss a renewal."),
        };
        Some(ExpiryAdvisory {
            days_remaining,
            message,
            action: GateAction::ContactManagement { mailto: self.mailto() },
        })
    }

    fn mailto(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(stored: LeaseStatus, url: Option<&str>, end: Option<NaiveDate>) -> TenantLeaseStatus {
        TenantLeaseStatus {
            lease_id: Some(1),
            status: stored,
            url: url.map(str::to_string),
            documenso_view_url: None,
            end_date: end,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 28).unwrap()
    }

    #[test]
    fn test_pending_lease_blocks_with_signing_link() {
        let mut gate = PortalGate::with_default_contact();
        let st = status(LeaseStatus::PendingApproval, Some("https://sign.example.com/d/1"), None);
        gate.observe(&st, today());
        assert!(gate.state().is_blocking());
        assert_eq!(
            gate.actions(),
            vec![GateAction::SignNow { url: "https://sign.example.com/d/1".to_string() }]
        );
    }

    #[test]
    fn test_pending_without_link_blocks_with_no_actions() {
        let mut gate = PortalGate::with_default_contact();
        gate.observe(&status(LeaseStatus::PendingApproval, None, None), today());
        assert!(gate.state().is_blocking());
        assert!(gate.actions().is_empty());
    }

    #[test]
    fn test_terminated_lease_offers_contact_only() {
        let mut gate = PortalGate::with_default_contact();
        gate.observe(&status(LeaseStatus::Terminated, None, None), today());
        assert_eq!(*gate.state(), GateState::Terminated);
        assert_eq!(
            gate.actions(),
            vec![GateAction::ContactManagement {
                mailto: format!("mailto:{DEFAULT_MANAGEMENT_EMAIL}")
            }]
        );
    }

    #[test]
    fn test_blocking_states_carry_distinct_copy() {
        let mut gate = PortalGate::with_default_contact();
        gate.observe(&status(LeaseStatus::Terminated, None, None), today());
        let terminated = gate.state().message().unwrap();
        gate.observe(&status(LeaseStatus::Expired, None, None), today());
        let expired = gate.state().message().unwrap();
        assert_ne!(terminated, expired);
        assert!(terminated.contains("terminated"));
        assert!(expired.contains("expired"));
    }

    #[test]
    fn test_stored_active_past_end_date_blocks_as_expired() {
        let mut gate = PortalGate::with_default_contact();
        let ended = NaiveDate::from_ymd_opt(2026, 8, 1);
        gate.observe(&status(LeaseStatus::Active, None, ended), today());
        assert_eq!(*gate.state(), GateState::Expired);
    }

    #[test]
    fn test_signature_observation_unblocks() {
        let mut gate = PortalGate::with_default_contact();
        gate.observe(
            &status(LeaseStatus::PendingApproval, Some("https://sign.example.com/d/1"), None),
            today(),
        );
        assert!(gate.state().is_blocking());
        let end = NaiveDate::from_ymd_opt(2027, 8, 31);
        gate.observe(&status(LeaseStatus::Active, None, end), today());
        assert_eq!(*gate.state(), GateState::Open);
        assert!(gate.actions().is_empty());
    }

    #[test]
    fn test_active_lease_near_expiry_does_not_block() {
        let mut gate = PortalGate::with_default_contact();
        let end = NaiveDate::from_ymd_opt(2026, 9, 15);
        gate.observe(&status(LeaseStatus::Active, None, end), today());
        assert_eq!(*gate.state(), GateState::Open);
    }

    #[test]
    fn test_expiring_lease_gets_contact_advisory_while_open() {
        let mut gate = PortalGate::with_default_contact();
        let end = NaiveDate::from_ymd_opt(2026, 9, 27);
        let st = status(LeaseStatus::Active, None, end);
        gate.observe(&st, today());
        assert_eq!(*gate.state(), GateState::Open);

        let advisory = gate.advisory(&st, today()).unwrap();
        assert_eq!(advisory.days_remaining, 30);
        assert!(advisory.message.contains("30 days"));
        assert_eq!(
            advisory.action,
            GateAction::ContactManagement {
                mailto: format!("mailto:{DEFAULT_MANAGEMENT_EMAIL}")
            }
        );
    }

    #[test]
    fn test_no_advisory_outside_the_window() {
        let gate = PortalGate::with_default_contact();
        let far_out = status(LeaseStatus::Active, None, NaiveDate::from_ymd_opt(2027, 8, 31));
        assert!(gate.advisory(&far_out, today()).is_none());

        let pending = status(LeaseStatus::PendingApproval, None, None);
        assert!(gate.advisory(&pending, today()).is_none());
    }
}
