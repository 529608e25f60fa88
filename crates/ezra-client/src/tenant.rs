// ============================================================================
// EZRA Client - Tenant Surface
// File: crates/ezra-client/src/tenant.rs
// ============================================================================
//! Tenant-facing reads (lease signing status, complaints, work orders,
//! lockers, parking) and the two tenant mutations (file a complaint,
//! request a guest parking permit).

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use ezra_core::{
    resolve_status, Complaint, ComplaintCategory, DisplayStatus, DomainError, LeaseStatus, Locker,
    ParkingPermit, WorkOrder,
};
use ezra_shared::constants::MAX_PARKING_PERMITS_PER_TENANT;

use crate::error::ApiError;
use crate::leases::LeaseClient;

/// What the tenant portal needs to decide its gate: the lease's stored
/// status plus whichever document links the backend has for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantLeaseStatus {
    #[serde(default)]
    pub lease_id: Option<i64>,
    pub status: LeaseStatus,
    /// Signing link while the lease awaits signature; signed PDF link after.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub documenso_view_url: Option<String>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl TenantLeaseStatus {
    /// Records without an end date (drafts, some pending approvals) fall
    /// back to a stored-status-only mapping.
    pub fn display_status(&self, today: NaiveDate) -> DisplayStatus {
        match self.end_date {
            Some(end) => resolve_status(self.status, end, today),
            None => DisplayStatus::from(self.status),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewComplaint {
    pub tenant_id: i64,
    pub title: String,
    pub description: String,
    pub category: ComplaintCategory,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewParkingPermit {
    pub tenant_id: i64,
    pub guest_name: String,
    pub car_color: String,
    pub car_model: String,
    pub license_plate: String,
    pub expires_at: DateTime<Utc>,
}

impl LeaseClient {
    /// Fetches the tenant's lease signing status, bypassing any cached copy
    /// when `fresh` is set (the signature poller needs live reads).
    #[instrument(skip(self))]
    pub async fn lease_status_for(
        &self,
        user_id: i64,
        fresh: bool,
    ) -> Result<Arc<TenantLeaseStatus>, ApiError> {
        if !fresh {
            if let Some(status) = self.cache.lease_status(user_id).await {
                return Ok(status);
            }
        }
        let status: TenantLeaseStatus =
            self.http.get_json(&format!("/tenant/leases/{user_id}/signing-url")).await?;
        info!(user_id, status = status.status.as_str(), "fetched tenant lease status");
        Ok(self.cache.store_lease_status(user_id, status).await)
    }

    pub async fn complaints_for(&self, user_id: i64) -> Result<Arc<Vec<Complaint>>, ApiError> {
        if let Some(rows) = self.cache.complaints(user_id).await {
            return Ok(rows);
        }
        let rows: Vec<Complaint> =
            self.http.get_json(&format!("/tenant/complaints?user_id={user_id}")).await?;
        Ok(self.cache.store_complaints(user_id, rows).await)
    }

    pub async fn work_orders_for(&self, user_id: i64) -> Result<Arc<Vec<WorkOrder>>, ApiError> {
        if let Some(rows) = self.cache.work_orders(user_id).await {
            return Ok(rows);
        }
        let rows: Vec<WorkOrder> =
            self.http.get_json(&format!("/tenant/work_orders?user_id={user_id}")).await?;
        Ok(self.cache.store_work_orders(user_id, rows).await)
    }

    pub async fn lockers_for(&self, user_id: i64) -> Result<Arc<Vec<Locker>>, ApiError> {
        if let Some(rows) = self.cache.lockers(user_id).await {
            return Ok(rows);
        }
        let rows: Vec<Locker> =
            self.http.get_json(&format!("/tenant/lockers?user_id={user_id}")).await?;
        Ok(self.cache.store_lockers(user_id, rows).await)
    }

    pub async fn parking_permits_for(
        &self,
        user_id: i64,
    ) -> Result<Arc<Vec<ParkingPermit>>, ApiError> {
        if let Some(rows) = self.cache.parking(user_id).await {
            return Ok(rows);
        }
        let rows: Vec<ParkingPermit> =
            self.http.get_json(&format!("/tenant/parking?user_id={user_id}")).await?;
        Ok(self.cache.store_parking(user_id, rows).await)
    }

    #[instrument(skip(self, complaint), fields(tenant_id = complaint.tenant_id))]
    pub async fn file_complaint(&self, complaint: NewComplaint) -> Result<Complaint, ApiError> {
        let created: Complaint = self.http.post_json("/tenant/complaints", &complaint).await?;
        self.cache.invalidate_complaints(complaint.tenant_id).await;
        Ok(created)
    }

    /// Requests a guest parking permit. The per-tenant permit limit is
    /// checked against current permits before any request is issued.
    #[instrument(skip(self, permit), fields(tenant_id = permit.tenant_id))]
    pub async fn request_parking_permit(
        &self,
        permit: NewParkingPermit,
    ) -> Result<ParkingPermit, ApiError> {
        let existing = self.parking_permits_for(permit.tenant_id).await?;
        if existing.len() >= MAX_PARKING_PERMITS_PER_TENANT {
            return Err(ApiError::Validation(DomainError::Validation(format!(
                "Guest parking is limited to {MAX_PARKING_PERMITS_PER_TENANT} permits per tenant"
            ))));
        }
        let created: ParkingPermit = self.http.post_json("/tenant/parking", &permit).await?;
        self.cache.invalidate_parking(permit.tenant_id).await;
        Ok(created)
    }
}
