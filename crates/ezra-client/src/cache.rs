// ============================================================================
// EZRA Client - Query Cache
// File: crates/ezra-client/src/cache.rs
// ============================================================================
//! Read caches for the admin and tenant query surfaces.
//!
//! Every lease mutation invalidates the lease-related entries so the next
//! read reflects backend-computed state. Peripheral collections (complaints,
//! work orders, lockers, parking) are keyed per tenant and invalidated by
//! their own mutations only.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use moka::future::Cache;
use tracing::debug;

use ezra_core::{Apartment, Complaint, Locker, ParkingPermit, Tenant, WorkOrder};

use crate::leases::LeaseSummary;
use crate::tenant::TenantLeaseStatus;

const COLLECTION_TTL: Duration = Duration::from_secs(30);
const STATUS_TTL: Duration = Duration::from_secs(15);
const DOCUMENT_TTL: Duration = Duration::from_secs(300);

pub struct QueryCache {
    leases: Cache<(), Arc<Vec<LeaseSummary>>>,
    tenants_without_lease: Cache<(), Arc<Vec<Tenant>>>,
    available_apartments: Cache<(), Arc<Vec<Apartment>>>,
    lease_status: Cache<i64, Arc<TenantLeaseStatus>>,
    complaints: Cache<i64, Arc<Vec<Complaint>>>,
    work_orders: Cache<i64, Arc<Vec<WorkOrder>>>,
    lockers: Cache<i64, Arc<Vec<Locker>>>,
    parking: Cache<i64, Arc<Vec<ParkingPermit>>>,
    // Lease PDFs are large; keep only a handful and let them expire quickly.
    documents: Cache<i64, Bytes>,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            leases: collection_cache(),
            tenants_without_lease: collection_cache(),
            available_apartments: collection_cache(),
            lease_status: Cache::builder()
                .max_capacity(256)
                .time_to_live(STATUS_TTL)
                .build(),
            complaints: keyed_cache(),
            work_orders: keyed_cache(),
            lockers: keyed_cache(),
            parking: keyed_cache(),
            documents: Cache::builder()
                .max_capacity(8)
                .time_to_live(DOCUMENT_TTL)
                .build(),
        }
    }

    pub(crate) async fn leases(&self) -> Option<Arc<Vec<LeaseSummary>>> {
        self.leases.get(&()).await
    }

    pub(crate) async fn store_leases(&self, rows: Vec<LeaseSummary>) -> Arc<Vec<LeaseSummary>> {
        let rows = Arc::new(rows);
        self.leases.insert((), rows.clone()).await;
        rows
    }

    pub(crate) async fn tenants_without_lease(&self) -> Option<Arc<Vec<Tenant>>> {
        self.tenants_without_lease.get(&()).await
    }

    pub(crate) async fn store_tenants_without_lease(&self, rows: Vec<Tenant>) -> Arc<Vec<Tenant>> {
        let rows = Arc::new(rows);
        self.tenants_without_lease.insert((), rows.clone()).await;
        rows
    }

    pub(crate) async fn available_apartments(&self) -> Option<Arc<Vec<Apartment>>> {
        self.available_apartments.get(&()).await
    }

    pub(crate) async fn store_available_apartments(
        &self,
        rows: Vec<Apartment>,
    ) -> Arc<Vec<Apartment>> {
        let rows = Arc::new(rows);
        self.available_apartments.insert((), rows.clone()).await;
        rows
    }

    pub(crate) async fn lease_status(&self, user_id: i64) -> Option<Arc<TenantLeaseStatus>> {
        self.lease_status.get(&user_id).await
    }

    pub(crate) async fn store_lease_status(
        &self,
        user_id: i64,
        status: TenantLeaseStatus,
    ) -> Arc<TenantLeaseStatus> {
        let status = Arc::new(status);
        self.lease_status.insert(user_id, status.clone()).await;
        status
    }

    pub(crate) async fn complaints(&self, user_id: i64) -> Option<Arc<Vec<Complaint>>> {
        self.complaints.get(&user_id).await
    }

    pub(crate) async fn store_complaints(
        &self,
        user_id: i64,
        rows: Vec<Complaint>,
    ) -> Arc<Vec<Complaint>> {
        let rows = Arc::new(rows);
        self.complaints.insert(user_id, rows.clone()).await;
        rows
    }

    pub(crate) async fn invalidate_complaints(&self, user_id: i64) {
        self.complaints.invalidate(&user_id).await;
    }

    pub(crate) async fn work_orders(&self, user_id: i64) -> Option<Arc<Vec<WorkOrder>>> {
        self.work_orders.get(&user_id).await
    }

    pub(crate) async fn store_work_orders(
        &self,
        user_id: i64,
        rows: Vec<WorkOrder>,
    ) -> Arc<Vec<WorkOrder>> {
        let rows = Arc::new(rows);
        self.work_orders.insert(user_id, rows.clone()).await;
        rows
    }

    pub(crate) async fn lockers(&self, user_id: i64) -> Option<Arc<Vec<Locker>>> {
        self.lockers.get(&user_id).await
    }

    pub(crate) async fn store_lockers(&self, user_id: i64, rows: Vec<Locker>) -> Arc<Vec<Locker>> {
        let rows = Arc::new(rows);
        self.lockers.insert(user_id, rows.clone()).await;
        rows
    }

    pub(crate) async fn parking(&self, user_id: i64) -> Option<Arc<Vec<ParkingPermit>>> {
        self.parking.get(&user_id).await
    }

    pub(crate) async fn store_parking(
        &self,
        user_id: i64,
        rows: Vec<ParkingPermit>,
    ) -> Arc<Vec<ParkingPermit>> {
        let rows = Arc::new(rows);
        self.parking.insert(user_id, rows.clone()).await;
        rows
    }

    pub(crate) async fn invalidate_parking(&self, user_id: i64) {
        self.parking.invalidate(&user_id).await;
    }

    pub(crate) async fn document(&self, lease_id: i64) -> Option<Bytes> {
        self.documents.get(&lease_id).await
    }

    pub(crate) async fn store_document(&self, lease_id: i64, content: Bytes) {
        self.documents.insert(lease_id, content).await;
    }

    /// Drops every lease-derived entry. Tenant pairings and apartment
    /// availability change with lease state, so those go too.
    pub(crate) async fn after_lease_mutation(&self, tenant_id: Option<i64>, lease_id: Option<i64>) {
        debug!(?tenant_id, ?lease_id, "invalidating lease caches");
        self.leases.invalidate(&()).await;
        self.tenants_without_lease.invalidate(&()).await;
        self.available_apartments.invalidate(&()).await;
        match tenant_id {
            Some(id) => self.lease_status.invalidate(&id).await,
            None => self.lease_status.invalidate_all(),
        }
        if let Some(id) = lease_id {
            self.documents.invalidate(&id).await;
        }
    }
}

fn collection_cache<V: Clone + Send + Sync + 'static>() -> Cache<(), V> {
    Cache::builder().max_capacity(1).time_to_live(COLLECTION_TTL).build()
}

fn keyed_cache<V: Clone + Send + Sync + 'static>() -> Cache<i64, V> {
    Cache::builder().max_capacity(256).time_to_live(COLLECTION_TTL).build()
}
