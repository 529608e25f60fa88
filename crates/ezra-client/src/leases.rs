// ============================================================================
// EZRA Client - Lease Workflow Client
// File: crates/ezra-client/src/leases.rs
// ============================================================================
//! The lease workflow client: admin reads and the six lifecycle mutations
//! (create, send, renew, amend, terminate, cancel).
//!
//! Each mutation follows the same shape: claim its operation cell, validate
//! the payload locally, call the backend with a fresh bearer token, settle
//! the cell, and on success invalidate the lease read caches.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use ezra_core::{
    resolve_status, AmendLeasePayload, Apartment, CreateLeasePayload, DisplayStatus, Lease,
    LeaseStatus, RenewLeasePayload, RentAmount, Tenant,
};
use ezra_shared::config::AppConfig;

use crate::auth::TokenProvider;
use crate::cache::QueryCache;
use crate::error::ApiError;
use crate::http::Http;
use crate::ops::{OpGuard, OpKind, OpRegistry, OpState};

/// One row of the admin lease table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaseSummary {
    pub id: i64,
    #[serde(rename = "tenantId")]
    pub tenant_id: i64,
    #[serde(rename = "apartmentId")]
    pub apartment_id: i64,
    #[serde(rename = "tenantName")]
    pub tenant_name: String,
    pub apartment: String,
    #[serde(rename = "leaseStartDate")]
    pub start_date: NaiveDate,
    #[serde(rename = "leaseEndDate")]
    pub end_date: NaiveDate,
    #[serde(rename = "rentAmount")]
    pub rent_amount: RentAmount,
    pub status: LeaseStatus,
    #[serde(rename = "adminDocUrl", default)]
    pub admin_doc_url: Option<String>,
}

impl LeaseSummary {
    /// Display status for this row, derived from the stored status and the
    /// end date relative to `today`.
    pub fn display_status(&self, today: NaiveDate) -> DisplayStatus {
        resolve_status(self.status, self.end_date, today)
    }
}

/// Backend response to a lifecycle mutation.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaseReceipt {
    #[serde(rename = "lease_id")]
    pub lease_id: i64,
    #[serde(rename = "lease_number", default)]
    pub lease_number: Option<i64>,
    pub status: LeaseStatus,
    #[serde(rename = "sign_url", default)]
    pub signing_url: Option<String>,
    #[serde(rename = "external_doc_id", default)]
    pub external_doc_id: Option<String>,
    #[serde(default)]
    pub updated: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl LeaseReceipt {
    pub fn outcome(&self) -> WriteOutcome {
        if self.updated {
            WriteOutcome::Updated
        } else {
            WriteOutcome::Created
        }
    }
}

/// Whether an upsert-style mutation created a new lease record or replaced
/// an existing draft for the same tenant and apartment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Updated,
}

pub struct LeaseClient {
    pub(crate) http: Http,
    pub(crate) cache: QueryCache,
    ops: OpRegistry,
}

impl LeaseClient {
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            http: Http::new(base_url, tokens),
            cache: QueryCache::new(),
            ops: OpRegistry::new(),
        }
    }

    pub fn from_config(config: &AppConfig, tokens: Arc<dyn TokenProvider>) -> Self {
        Self::new(config.api.base_url.clone(), tokens)
    }

    /// Current tri-state of a lifecycle operation, for the UI layer.
    pub fn op_state(&self, kind: OpKind) -> OpState {
        self.ops.state(kind)
    }

    /// Clears a settled operation back to idle so it can be retried.
    pub fn reset_op(&self, kind: OpKind) {
        self.ops.reset(kind)
    }

    // ---- Admin reads -------------------------------------------------------

    pub async fn list_leases(&self) -> Result<Arc<Vec<LeaseSummary>>, ApiError> {
        if let Some(rows) = self.cache.leases().await {
            return Ok(rows);
        }
        let rows: Vec<LeaseSummary> = self.http.get_json("/admin/leases").await?;
        info!(count = rows.len(), "fetched lease table");
        Ok(self.cache.store_leases(rows).await)
    }

    /// Full lease record for the admin detail card, including lineage
    /// (`previous_lease_id`, amendment reason) and provider links the
    /// summary row omits.
    pub async fn get_lease(&self, lease_id: i64) -> Result<Lease, ApiError> {
        let lease: Lease = self.http.get_json(&format!("/admin/leases/{lease_id}")).await?;
        info!(lease_id, status = lease.status.as_str(), "fetched lease detail");
        Ok(lease)
    }

    pub async fn tenants_without_lease(&self) -> Result<Arc<Vec<Tenant>>, ApiError> {
        if let Some(rows) = self.cache.tenants_without_lease().await {
            return Ok(rows);
        }
        let rows: Vec<Tenant> = self.http.get_json("/admin/tenants/leases/without-lease").await?;
        Ok(self.cache.store_tenants_without_lease(rows).await)
    }

    pub async fn available_apartments(&self) -> Result<Arc<Vec<Apartment>>, ApiError> {
        if let Some(rows) = self.cache.available_apartments().await {
            return Ok(rows);
        }
        let rows: Vec<Apartment> =
            self.http.get_json("/admin/tenants/leases/apartments-available").await?;
        Ok(self.cache.store_available_apartments(rows).await)
    }

    // ---- Lifecycle mutations ----------------------------------------------

    /// Creates a lease draft. The backend forces the stored status to draft
    /// regardless of what the caller sends.
    #[instrument(skip(self, payload), fields(tenant_id = payload.tenant_id))]
    pub async fn create_lease(&self, payload: CreateLeasePayload) -> Result<LeaseReceipt, ApiError> {
        let guard = self.ops.begin(OpKind::Create)?;
        let payload = match payload.validated() {
            Ok(p) => p,
            Err(err) => return Err(settle_validation(guard, err)),
        };
        info!(tenant_id = payload.tenant_id, apartment_id = payload.apartment_id, "creating lease");
        let tenant_id = payload.tenant_id;
        let result = self.http.post_json("/admin/leases/create", &payload).await;
        self.settle_mutation(guard, result, Some(tenant_id)).await
    }

    /// Dispatches a lease for tenant signature. Only draft and
    /// pending-approval leases can be sent; anything else is refused locally.
    #[instrument(skip(self))]
    pub async fn send_lease(
        &self,
        lease_id: i64,
        status: LeaseStatus,
        tenant_id: i64,
    ) -> Result<LeaseReceipt, ApiError> {
        let guard = self.ops.begin(OpKind::Send)?;
        if !status.is_sendable() {
            let err = ApiError::Validation(ezra_core::DomainError::NotSendable(
                status.as_str().to_string(),
            ));
            guard.fail(err.display_message());
            return Err(err);
        }
        info!(lease_id, "sending lease for signature");
        let result = self.http.post_empty(&format!("/admin/leases/send/{lease_id}")).await;
        self.settle_mutation(guard, result, Some(tenant_id)).await
    }

    /// Starts a renewal chained to an expiring lease. The new record lands
    /// in pending-approval, awaiting tenant signature.
    #[instrument(skip(self, payload), fields(previous_lease_id = payload.previous_lease_id))]
    pub async fn renew_lease(&self, payload: RenewLeasePayload) -> Result<LeaseReceipt, ApiError> {
        let guard = self.ops.begin(OpKind::Renew)?;
        let payload = match payload.validated() {
            Ok(p) => p,
            Err(err) => return Err(settle_validation(guard, err)),
        };
        info!(previous_lease_id = payload.previous_lease_id, "renewing lease");
        let tenant_id = payload.tenant_id;
        let result = self.http.post_json("/admin/leases/renew", &payload).await;
        self.settle_mutation(guard, result, Some(tenant_id)).await
    }

    /// Amends an active lease mid-term. The amendment replaces the original
    /// once signed; the original stays untouched until then.
    #[instrument(skip(self, payload), fields(previous_lease_id = payload.previous_lease_id))]
    pub async fn amend_lease(&self, payload: AmendLeasePayload) -> Result<LeaseReceipt, ApiError> {
        let guard = self.ops.begin(OpKind::Amend)?;
        let payload = match payload.validated() {
            Ok(p) => p,
            Err(err) => return Err(settle_validation(guard, err)),
        };
        info!(previous_lease_id = payload.previous_lease_id, "amending lease");
        let tenant_id = payload.tenant_id;
        let result = self.http.post_json("/admin/leases/amend", &payload).await;
        self.settle_mutation(guard, result, Some(tenant_id)).await
    }

    /// Terminates an active lease immediately.
    #[instrument(skip(self))]
    pub async fn terminate_lease(&self, lease_id: i64) -> Result<LeaseReceipt, ApiError> {
        let guard = self.ops.begin(OpKind::Terminate)?;
        info!(lease_id, "terminating lease");
        let result = self.http.post_empty(&format!("/admin/leases/terminate/{lease_id}")).await;
        self.settle_mutation(guard, result, None).await
    }

    /// Cancels an unsigned lease (draft or pending approval), voiding the
    /// external signing document if one was issued.
    #[instrument(skip(self))]
    pub async fn cancel_lease(&self, lease_id: i64) -> Result<LeaseReceipt, ApiError> {
        let guard = self.ops.begin(OpKind::Cancel)?;
        info!(lease_id, "cancelling lease");
        let result = self.http.post_empty(&format!("/admin/leases/cancel/{lease_id}")).await;
        self.settle_mutation(guard, result, None).await
    }

    async fn settle_mutation(
        &self,
        guard: OpGuard<'_>,
        result: Result<LeaseReceipt, ApiError>,
        tenant_id: Option<i64>,
    ) -> Result<LeaseReceipt, ApiError> {
        match result {
            Ok(receipt) => {
                guard.succeed();
                self.cache.after_lease_mutation(tenant_id, Some(receipt.lease_id)).await;
                Ok(receipt)
            }
            Err(err) => {
                error!(error = %err, "lease mutation failed");
                guard.fail(err.display_message());
                Err(err)
            }
        }
    }
}

fn settle_validation(guard: OpGuard<'_>, err: ezra_core::DomainError) -> ApiError {
    let err = ApiError::Validation(err);
    guard.fail(err.display_message());
    err
}
