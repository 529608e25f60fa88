//! # EZRA Client
//!
//! The lease workflow client: typed operations against the backend REST
//! surface, bearer-token auth through an injected provider, per-operation
//! tri-state tracking, a short-lived query cache invalidated after every
//! mutation, and signing-link/document retrieval.

pub mod auth;
pub mod cache;
pub mod documents;
pub mod error;
pub mod leases;
pub mod ops;
pub mod poll;
pub mod tenant;

mod http;

pub use auth::{RetryingTokenProvider, StaticTokenProvider, TokenProvider};
pub use cache::QueryCache;
pub use documents::ViewableDocument;
pub use error::ApiError;
pub use leases::{LeaseClient, LeaseReceipt, LeaseSummary, WriteOutcome};
pub use ops::{OpKind, OpState};
pub use poll::{poll_until, PollConfig, PollOutcome};
pub use tenant::{NewComplaint, NewParkingPermit, TenantLeaseStatus};
