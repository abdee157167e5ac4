//! Formatting utilities used for CLI and export outputs.

use crate::models::status::HealthStatus;
use crate::utils::colors::{RESET, color_for_health};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// "today", "1 day ago", "5 days ago", or "never".
pub fn format_days_ago(days: Option<i64>) -> String {
    match days {
        None => "never".to_string(),
        Some(0) => "today".to_string(),
        Some(1) => "1 day ago".to_string(),
        Some(d) if d < 0 => format!("in {} days", -d),
        Some(d) => format!("{} days ago", d),
    }
}

pub fn format_height(cm: f64) -> String {
    format!("{:.1} cm", cm)
}

/// Height delta between two measurements, signed.
pub fn format_growth_delta(current: f64, previous: Option<f64>) -> String {
    match previous {
        Some(p) => {
            let delta = current - p;
            let sign = if delta > 0.0 { "+" } else { "" };
            format!("{}{:.1} cm", sign, delta)
        }
        None => "--".to_string(),
    }
}

/// Coloured "icon label" for a health status.
pub fn describe_health(health: HealthStatus) -> String {
    format!(
        "{}{} {}{}",
        color_for_health(health),
        health.icon(),
        health.label(),
        RESET
    )
}

pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

static ANSI_RE: std::sync::LazyLock<regex::Regex> = std::sync::LazyLock::new(|| {
    regex::Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex")
});

pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}
