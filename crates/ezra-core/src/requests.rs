// ============================================================================
// EZRA Core - Lease Workflow Payloads
// File: crates/ezra-core/src/requests.rs
// ============================================================================
//! Mutation payloads and the client-side validation run before any network
//! call. Only required-field presence, date ordering, and rent positivity are
//! checked here; duplicate detection, apartment availability, and existence
//! checks belong to the backend, which stays authoritative.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::Apartment;
use crate::error::DomainError;
use crate::money::RentAmount;

/// Payload for creating a draft lease.
///
/// `check_existing` asks the backend to dedupe on the tenant+apartment pair;
/// a success response may therefore describe an update, not a new row.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateLeasePayload {
    pub tenant_id: i64,
    pub apartment_id: i64,

    #[validate(length(min = 1, message = "Tenant name is required"))]
    pub tenant_name: String,

    #[validate(email(message = "A valid tenant email is required"))]
    pub tenant_email: String,

    #[validate(length(min = 1, message = "Property address is required"))]
    pub property_address: String,

    pub rent_amount: RentAmount,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    #[validate(length(min = 1, message = "Document title is required"))]
    pub document_title: String,

    pub check_existing: bool,
}

impl CreateLeasePayload {
    pub fn new(
        tenant_id: i64,
        apartment: &Apartment,
        tenant_name: impl Into<String>,
        tenant_email: impl Into<String>,
        rent_amount: RentAmount,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        let property_address = apartment.property_address();
        Self {
            tenant_id,
            apartment_id: apartment.id,
            tenant_name: tenant_name.into(),
            tenant_email: tenant_email.into(),
            document_title: format!("Lease Agreement for {}", property_address),
            property_address,
            rent_amount,
            start_date,
            end_date,
            check_existing: true,
        }
    }

    pub fn validated(self) -> Result<Self, DomainError> {
        self.validate()?;
        check_term(self.start_date, self.end_date)?;
        check_rent(self.rent_amount)?;
        Ok(self)
    }
}

/// Payload for renewing a lease: a brand-new row linked to its source
/// through `previous_lease_id`, awaiting re-signature.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RenewLeasePayload {
    pub previous_lease_id: i64,
    pub tenant_id: i64,
    pub apartment_id: i64,

    #[validate(length(min = 1, message = "Tenant name is required"))]
    pub tenant_name: String,

    #[validate(email(message = "A valid tenant email is required"))]
    pub tenant_email: String,

    #[validate(length(min = 1, message = "Property address is required"))]
    pub property_address: String,

    pub rent_amount: RentAmount,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    #[validate(length(min = 1, message = "Document title is required"))]
    pub document_title: String,

    pub check_existing: bool,
}

impl RenewLeasePayload {
    pub fn validated(self) -> Result<Self, DomainError> {
        self.validate()?;
        check_term(self.start_date, self.end_date)?;
        check_rent(self.rent_amount)?;
        Ok(self)
    }
}

/// Payload for amending a lease. Amendments intentionally coexist with the
/// original pending approval, so `check_existing` is pinned to false; a
/// non-empty reason is mandatory.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AmendLeasePayload {
    pub previous_lease_id: i64,
    pub tenant_id: i64,
    pub apartment_id: i64,

    #[validate(length(min = 1, message = "Tenant name is required"))]
    pub tenant_name: String,

    #[validate(email(message = "A valid tenant email is required"))]
    pub tenant_email: String,

    #[validate(length(min = 1, message = "Property address is required"))]
    pub property_address: String,

    pub rent_amount: RentAmount,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    #[validate(length(min = 1, message = "Document title is required"))]
    pub document_title: String,

    pub amendment_reason: String,
    pub is_amendment: bool,
    pub check_existing: bool,
}

impl AmendLeasePayload {
    /// Move the amendment to a different apartment. The address printed on
    /// the document must come from the new unit, never the stale one.
    pub fn with_apartment(mut self, apartment: &Apartment) -> Self {
        self.apartment_id = apartment.id;
        self.property_address = apartment.property_address();
        self
    }

    pub fn validated(self) -> Result<Self, DomainError> {
        if self.amendment_reason.trim().is_empty() {
            return Err(DomainError::MissingAmendmentReason);
        }
        self.validate()?;
        check_term(self.start_date, self.end_date)?;
        check_rent(self.rent_amount)?;
        Ok(Self {
            is_amendment: true,
            check_existing: false,
            ..self
        })
    }
}

/// End date must be strictly after start date, at day granularity.
fn check_term(start: NaiveDate, end: NaiveDate) -> Result<(), DomainError> {
    if end <= start {
        return Err(DomainError::EndDateNotAfterStart);
    }
    Ok(())
}

fn check_rent(rent: RentAmount) -> Result<(), DomainError> {
    if !rent.is_positive() {
        return Err(DomainError::InvalidRentAmount);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apartment() -> Apartment {
        Apartment {
            id: 12,
            unit_number: "B218".to_string(),
            price: RentAmount::from_major(2060),
            size_sq_ft: 840,
            availability: true,
            management_id: 1,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_payload() -> CreateLeasePayload {
        CreateLeasePayload::new(
            7,
            &apartment(),
            "Grace Hall",
            "grace.hall@example.com",
            RentAmount::from_major(2060),
            date(2025, 1, 1),
            date(2026, 1, 1),
        )
    }

    #[test]
    fn test_create_payload_defaults() {
        let payload = create_payload();
        assert!(payload.check_existing);
        assert_eq!(payload.property_address, "B218");
        assert_eq!(payload.document_title, "Lease Agreement for B218");
        assert!(payload.validated().is_ok());
    }

    #[test]
    fn test_end_date_must_follow_start_date() {
        let mut payload = create_payload();
        payload.end_date = payload.start_date;
        assert!(matches!(
            payload.clone().validated(),
            Err(DomainError::EndDateNotAfterStart)
        ));

        payload.end_date = date(2024, 12, 31);
        assert!(matches!(payload.validated(), Err(DomainError::EndDateNotAfterStart)));
    }

    #[test]
    fn test_rent_must_be_positive() {
        let mut payload = create_payload();
        payload.rent_amount = RentAmount::from_minor(0);
        assert!(matches!(payload.validated(), Err(DomainError::InvalidRentAmount)));
    }

    #[test]
    fn test_missing_fields_rejected() {
        let mut payload = create_payload();
        payload.property_address = String::new();
        assert!(matches!(payload.validated(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_amendment_requires_reason() {
        let base = create_payload();
        let amend = AmendLeasePayload {
            previous_lease_id: 7,
            tenant_id: base.tenant_id,
            apartment_id: base.apartment_id,
            tenant_name: base.tenant_name.clone(),
            tenant_email: base.tenant_email.clone(),
            property_address: base.property_address.clone(),
            rent_amount: base.rent_amount,
            start_date: base.start_date,
            end_date: base.end_date,
            document_title: base.document_title.clone(),
            amendment_reason: "   ".to_string(),
            is_amendment: false,
            check_existing: true,
        };
        assert!(matches!(
            amend.clone().validated(),
            Err(DomainError::MissingAmendmentReason)
        ));

        let amend = AmendLeasePayload {
            amendment_reason: "Rent adjustment for renovated unit".to_string(),
            ..amend
        };
        let validated = amend.validated().unwrap();
        // Pinned regardless of what the caller set.
        assert!(validated.is_amendment);
        assert!(!validated.check_existing);
    }

    #[test]
    fn test_apartment_change_recomputes_address() {
        let other = Apartment {
            id: 44,
            unit_number: "C466".to_string(),
            price: RentAmount::from_major(1100),
            size_sq_ft: 615,
            availability: true,
            management_id: 1,
        };
        let base = create_payload();
        let amend = AmendLeasePayload {
            previous_lease_id: 7,
            tenant_id: base.tenant_id,
            apartment_id: base.apartment_id,
            tenant_name: base.tenant_name,
            tenant_email: base.tenant_email,
            property_address: base.property_address,
            rent_amount: base.rent_amount,
            start_date: base.start_date,
            end_date: base.end_date,
            document_title: base.document_title,
            amendment_reason: "Unit transfer".to_string(),
            is_amendment: false,
            check_existing: true,
        }
        .with_apartment(&other);

        assert_eq!(amend.apartment_id, 44);
        assert_eq!(amend.property_address, "C466");
    }
}
