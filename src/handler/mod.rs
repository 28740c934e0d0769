pub mod admin;
pub mod alerts;
pub mod auth;
pub mod bookings;
pub mod enquiries;
pub mod favorites;
pub mod properties;
pub mod users;
