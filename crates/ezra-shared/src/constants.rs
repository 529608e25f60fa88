//! Application-wide constants

/// Wire format for all calendar dates exchanged with the backend.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Management contact used by the blocked-portal prompts when no address is
/// configured.
pub const DEFAULT_MANAGEMENT_EMAIL: &str = "management@ezra.example.com";

/// How long a dialog stays open after a successful mutation before
/// auto-closing, so the user can read the confirmation.
pub const SUCCESS_AUTO_CLOSE_MS: u64 = 2_000;

/// Guest parking permits allowed per tenant.
pub const MAX_PARKING_PERMITS_PER_TENANT: usize = 2;
