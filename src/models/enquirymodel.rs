use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "enquiry_status", rename_all = "lowercase")]
pub enum EnquiryStatus {
    New,
    Contacted,
    Closed,
}

impl EnquiryStatus {
    pub fn label(&self) -> &str {
        match self {
            EnquiryStatus::New => "New",
            EnquiryStatus::Contacted => "Contacted",
            EnquiryStatus::Closed => "Closed",
        }
    }

    /// Parse an admin-supplied status label; unknown labels yield `None`
    /// and the request is silently ignored.
    pub fn from_label(label: &str) -> Option<EnquiryStatus> {
        match label {
            "New" => Some(EnquiryStatus::New),
            "Contacted" => Some(EnquiryStatus::Contacted),
            "Closed" => Some(EnquiryStatus::Closed),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Enquiry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub property_id: Option<Uuid>,
    pub message: String,
    pub status: EnquiryStatus,
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label() {
        assert_eq!(EnquiryStatus::from_label("New"), Some(EnquiryStatus::New));
        assert_eq!(EnquiryStatus::from_label("Contacted"), Some(EnquiryStatus::Contacted));
        assert_eq!(EnquiryStatus::from_label("Closed"), Some(EnquiryStatus::Closed));
        assert_eq!(EnquiryStatus::from_label("Resolved"), None);
        assert_eq!(EnquiryStatus::from_label("closed"), None);
    }
}
