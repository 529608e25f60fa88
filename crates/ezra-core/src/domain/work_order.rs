//! Work order entity (peripheral collaborator)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PeripheralStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderCategory {
    Plumbing,
    Electric,
    CarpentryRepairs,
    Hvac,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: i64,
    pub tenant_id: i64,
    pub title: String,
    pub description: String,
    pub category: WorkOrderCategory,
    pub status: PeripheralStatus,
    pub unit_number: Option<i64>,
    pub created_at: DateTime<Utc>,
}
