use crate::models::care_log::CareLog;
use crate::models::status::GrowthPoint;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct GrowthInfo {
    pub history: Vec<GrowthPoint>,
    pub current_height_cm: f64,
    pub previous_height_cm: Option<f64>,
}

/// Growth figures from the logs carrying a height measurement.
///
/// Storage order is not trusted: entries are sorted by timestamp, then id.
pub fn analyze_growth(logs: &[CareLog]) -> GrowthInfo {
    let mut measured: Vec<&CareLog> = logs.iter().filter(|l| l.is_growth()).collect();
    measured.sort_by_key(|l| (l.logged_at, l.id));

    let history: Vec<GrowthPoint> = measured
        .into_iter()
        .map(|l| GrowthPoint {
            at: l.logged_at,
            height_cm: l.height_cm,
        })
        .collect();

    let current_height_cm = history.last().map(|p| p.height_cm).unwrap_or(0.0);
    let previous_height_cm = history
        .len()
        .checked_sub(2)
        .map(|i| history[i].height_cm);

    GrowthInfo {
        history,
        current_height_cm,
        previous_height_cm,
    }
}
