pub mod add;
pub mod ask;
pub mod backup;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod edit_log;
pub mod expense;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod logs;
pub mod note;
pub mod photo;
pub mod reminder;
pub mod reminders;
pub mod show;
pub mod stats;
pub mod water;
pub mod weather;
