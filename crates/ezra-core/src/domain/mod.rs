//! # EZRA Core - Domain Module
//!
//! Domain entities for the lease workflow and its peripheral collaborators.

pub mod apartment;
pub mod complaint;
pub mod lease;
pub mod locker;
pub mod parking_permit;
pub mod tenant;
pub mod work_order;

// Re-export all entities and enums
pub use apartment::Apartment;
pub use complaint::{Complaint, ComplaintCategory};
pub use lease::{Lease, LeaseStatus};
pub use locker::Locker;
pub use parking_permit::ParkingPermit;
pub use tenant::{AccountStatus, Tenant};
pub use work_order::{WorkOrder, WorkOrderCategory};

use serde::{Deserialize, Serialize};

/// Shared lifecycle for complaints and work orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeripheralStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}
