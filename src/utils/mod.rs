pub mod chart;
pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;

pub use formatting::describe_health;
pub use formatting::format_days_ago;
