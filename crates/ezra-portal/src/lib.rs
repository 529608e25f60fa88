//! # EZRA Portal
//!
//! Presentation-side state for the tenant portal and the admin lease table:
//! the blocking access gate a tenant sees until their lease is in good
//! standing, and the per-card call-to-action mapping for lease rows.

pub mod dashboard;
pub mod gate;

pub use dashboard::{ExpiryNotice, LeaseCardAction, LeaseCardView};
pub use gate::{ExpiryAdvisory, GateAction, GateState, PortalGate};
