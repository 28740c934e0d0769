pub mod alertdtos;
pub mod bookingdtos;
pub mod enquirydtos;
pub mod propertydtos;
pub mod userdtos;
