//! Apartment domain entity

use serde::{Deserialize, Serialize};

use crate::money::RentAmount;

/// An apartment holds at most one non-terminal lease at a time; the
/// "available apartments" query on the backend excludes occupied units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Apartment {
    pub id: i64,
    pub unit_number: String,
    pub price: RentAmount,
    pub size_sq_ft: i64,
    pub availability: bool,
    pub management_id: i64,
}

impl Apartment {
    /// Address line used on lease documents for this unit.
    pub fn property_address(&self) -> String {
        self.unit_number.clone()
    }
}
