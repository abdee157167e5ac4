pub mod advisor;
pub mod backup;
pub mod calculator;
pub mod care_log;
pub mod expense;
pub mod log;
pub mod logic;
pub mod photo;
pub mod plant;
pub mod reminder;
pub mod weather;
