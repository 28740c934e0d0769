use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct CreateEnquiryDto {
    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    pub name: String,

    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Email is invalid")
    )]
    pub email: String,

    #[validate(length(min = 10, max = 20, message = "Phone number must be between 10-20 characters"))]
    pub phone: String,

    #[validate(length(min = 10, max = 1000, message = "Message must be between 10 and 1000 characters"))]
    pub message: String,

    pub property_id: Option<Uuid>,
}

/// Status arrives as the display label; values outside the known set are
/// ignored by the service rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEnquiryStatusDto {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct EnquiryListQueryDto {
    pub page: Option<usize>,
    pub limit: Option<usize>,
    pub status: Option<String>,
}
