//! Horizontal bar chart of a plant's growth history.

use crate::models::status::GrowthPoint;
use crate::utils::colors::{GREEN, RESET};

const BAR_WIDTH: usize = 40;

/// One line per measurement: date, bar scaled to the tallest point, height.
pub fn render_growth_chart(history: &[GrowthPoint]) -> String {
    if history.is_empty() {
        return "No growth measurements yet.\n".to_string();
    }

    let max = history
        .iter()
        .map(|p| p.height_cm)
        .fold(0.0_f64, f64::max);

    let mut out = String::new();
    for p in history {
        let len = if max > 0.0 {
            ((p.height_cm / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let bar = "█".repeat(len.max(1));
        out.push_str(&format!(
            "{} │{}{:<width$}{} {:>6.1} cm\n",
            p.at.format("%Y-%m-%d"),
            GREEN,
            bar,
            RESET,
            p.height_cm,
            width = BAR_WIDTH
        ));
    }
    out
}
