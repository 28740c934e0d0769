use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{alertmodel::PropertyAlert, propertymodel::PropertyType};

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct CreateAlertDto {
    // Any missing field means "match everything" for that dimension
    pub property_type: Option<PropertyType>,

    #[validate(range(min = 0, message = "Minimum price cannot be negative"))]
    pub min_price: Option<i64>,

    #[validate(range(min = 0, message = "Maximum price cannot be negative"))]
    pub max_price: Option<i64>,

    #[validate(length(max = 200, message = "Location must be at most 200 characters"))]
    pub location: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FilterAlertDto {
    pub id: Uuid,
    pub alert_type: String,
    pub property_type: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub location: Option<String>,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl FilterAlertDto {
    pub fn from_alert(alert: &PropertyAlert) -> Self {
        FilterAlertDto {
            id: alert.id,
            alert_type: alert.alert_type.clone(),
            property_type: alert.property_type.map(|t| t.label().to_string()),
            min_price: alert.min_price,
            max_price: alert.max_price,
            location: alert.location.clone(),
            is_active: alert.is_active,
            created_at: alert.created_at,
        }
    }
}
