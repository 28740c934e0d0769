pub mod activitymodel;
pub mod alertmodel;
pub mod bookingmodel;
pub mod enquirymodel;
pub mod favoritemodel;
pub mod propertymodel;
pub mod usermodel;
