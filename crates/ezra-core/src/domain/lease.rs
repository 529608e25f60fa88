// ============================================================================
// EZRA Core - Lease Entity
// File: crates/ezra-core/src/domain/lease.rs
// ============================================================================
//! Lease entity and its stored lifecycle status

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::money::RentAmount;

/// Stored lease lifecycle status. Exactly one holds at any time; renewals
/// and amendments never mutate a row, they create a new lease pointing back
/// through `previous_lease_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaseStatus {
    Draft,
    // The backend schema has a single pending state; "pending_tenant_approval"
    // appears in old payloads and is accepted as the same value.
    #[serde(alias = "pending_tenant_approval")]
    PendingApproval,
    Active,
    Expired,
    Terminated,
}

impl LeaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaseStatus::Draft => "draft",
            LeaseStatus::PendingApproval => "pending_approval",
            LeaseStatus::Active => "active",
            LeaseStatus::Expired => "expired",
            LeaseStatus::Terminated => "terminated",
        }
    }

    /// Terminal statuses free the apartment for a new lease.
    pub fn is_terminal(&self) -> bool {
        matches!(self, LeaseStatus::Expired | LeaseStatus::Terminated)
    }

    /// Only drafts (and re-sends of pending leases) may enter the signing
    /// workflow.
    pub fn is_sendable(&self) -> bool {
        matches!(self, LeaseStatus::Draft | LeaseStatus::PendingApproval)
    }
}

/// The contractual record binding a tenant to an apartment for a term.
///
/// Tenant name and email are denormalized onto the lease because the
/// signature provider needs them at document-generation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lease {
    pub id: i64,
    pub tenant_id: i64,
    pub apartment_id: i64,
    pub tenant_name: String,
    pub tenant_email: String,
    pub property_address: String,
    pub rent_amount: RentAmount,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: LeaseStatus,
    pub document_title: String,

    /// Set on renewals and amendments; links the new row to its predecessor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_lease_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amendment_reason: Option<String>,

    // Supplied by the signature provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documenso_view_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_pdf_url: Option<String>,

    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Lease {
    pub fn is_amendment(&self) -> bool {
        self.previous_lease_id.is_some() && self.amendment_reason.is_some()
    }
}
