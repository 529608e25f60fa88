//! # EZRA Core
//!
//! Domain entities and pure lease-lifecycle logic: the status resolver,
//! money representation, and client-side payload validation. No I/O lives
//! here; everything is deterministic given an injected `today`.

pub mod domain;
pub mod error;
pub mod money;
pub mod requests;
pub mod status;

pub use domain::{
    AccountStatus, Apartment, Complaint, ComplaintCategory, Lease, LeaseStatus, Locker,
    ParkingPermit, PeripheralStatus, Tenant, WorkOrder, WorkOrderCategory,
};
pub use error::DomainError;
pub use money::RentAmount;
pub use requests::{AmendLeasePayload, CreateLeasePayload, RenewLeasePayload};
pub use status::{resolve_status, DisplayStatus, EXPIRES_SOON_WINDOW_DAYS};
