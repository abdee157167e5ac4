/// ANSI color helper utilities for terminal output.
use crate::models::status::HealthStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Health color:
/// healthy → green
/// attention → yellow
/// critical → red
/// no data → grey
pub fn color_for_health(health: HealthStatus) -> &'static str {
    match health {
        HealthStatus::Healthy => GREEN,
        HealthStatus::Attention => YELLOW,
        HealthStatus::Critical => RED,
        HealthStatus::NoData => GREY,
    }
}

/// Returns a grey rendering for empty placeholders ("", "--").
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn colorize_should_water(value: bool) -> String {
    if value {
        format!("{GREEN}water{RESET}")
    } else {
        format!("{BLUE}skip{RESET}")
    }
}
