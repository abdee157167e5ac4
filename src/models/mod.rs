pub mod care_log;
pub mod expense;
pub mod log_status;
pub mod photo;
pub mod plant;
pub mod reminder;
pub mod status;
pub mod weather;
