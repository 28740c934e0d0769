use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::bookingmodel::VISIT_SLOTS;

fn validate_visit_slot(slot: &str) -> Result<(), ValidationError> {
    if VISIT_SLOTS.contains(&slot) {
        Ok(())
    } else {
        let mut error = ValidationError::new("invalid_visit_slot");
        error.message = Some(Cow::from("Visit time must be one of the offered one-hour slots"));
        Err(error)
    }
}

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingDto {
    pub visit_date: NaiveDate,

    #[validate(custom = "validate_visit_slot")]
    pub visit_slot: String,

    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    pub visitor_name: String,

    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Email is invalid")
    )]
    pub visitor_email: String,

    #[validate(length(min = 10, max = 20, message = "Phone number must be between 10-20 characters"))]
    pub visitor_phone: String,

    #[validate(range(min = 1, max = 10, message = "Number of visitors must be between 1 and 10"))]
    pub number_of_visitors: i32,

    #[validate(length(max = 500, message = "Notes must be at most 500 characters"))]
    pub message: Option<String>,
}

/// Status arrives as the display label; values outside the known set are
/// ignored by the service rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBookingStatusDto {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct BookingListQueryDto {
    pub page: Option<usize>,
    pub limit: Option<usize>,
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_slot_validation() {
        assert!(validate_visit_slot("09:00-10:00").is_ok());
        assert!(validate_visit_slot("17:00-18:00").is_ok());
        // lunch hour is not offered
        assert!(validate_visit_slot("13:00-14:00").is_err());
        assert!(validate_visit_slot("9:00-10:00").is_err());
        assert!(validate_visit_slot("").is_err());
    }

    #[test]
    fn test_create_booking_dto_bounds() {
        let dto = CreateBookingDto {
            visit_date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            visit_slot: "10:00-11:00".to_string(),
            visitor_name: "Asha Patel".to_string(),
            visitor_email: "asha@example.com".to_string(),
            visitor_phone: "9876543210".to_string(),
            number_of_visitors: 4,
            message: None,
        };
        assert!(dto.validate().is_ok());

        let mut too_many = dto.clone();
        too_many.number_of_visitors = 11;
        assert!(too_many.validate().is_err());

        let mut none = dto;
        none.number_of_visitors = 0;
        assert!(none.validate().is_err());
    }
}
