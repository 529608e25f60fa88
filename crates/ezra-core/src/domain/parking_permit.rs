//! Guest parking permit entity (peripheral collaborator)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkingPermit {
    pub id: i64,
    pub tenant_id: i64,
    pub guest_name: String,
    pub car_color: String,
    pub car_model: String,
    pub license_plate: String,
    pub expires_at: DateTime<Utc>,
}
