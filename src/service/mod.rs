pub mod activity_service;
pub mod alert_service;
pub mod booking_service;
pub mod enquiry_service;
pub mod error;
pub mod favorite_service;
pub mod property_service;
