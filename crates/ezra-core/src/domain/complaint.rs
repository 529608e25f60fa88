//! Complaint entity (peripheral collaborator)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PeripheralStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintCategory {
    Maintenance,
    Noise,
    Security,
    Parking,
    Neighbor,
    Trash,
    Internet,
    Lease,
    NaturalDisaster,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Complaint {
    pub id: i64,
    pub tenant_id: i64,
    pub title: String,
    pub description: String,
    pub category: ComplaintCategory,
    pub status: PeripheralStatus,
    pub created_at: DateTime<Utc>,
}
