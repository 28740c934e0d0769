pub mod activitydb;
pub mod alertdb;
pub mod bookingdb;
pub mod db;
pub mod enquirydb;
pub mod favoritedb;
pub mod propertydb;
pub mod userdb;
