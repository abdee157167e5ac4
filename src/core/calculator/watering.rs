use crate::core::calculator::days::days_between;
use crate::models::care_log::CareLog;
use crate::models::plant::Plant;
use chrono::{DateTime, Local};

/// Resolve the last watering instant.
///
/// The plant's own field wins; otherwise the latest watered log; otherwise
/// `None` ("never").
pub fn last_watered(plant: &Plant, logs: &[CareLog]) -> Option<DateTime<Local>> {
    plant.last_watered.or_else(|| {
        logs.iter()
            .filter(|l| l.watered)
            .map(|l| l.logged_at)
            .max()
    })
}

pub fn days_since_watered(
    plant: &Plant,
    logs: &[CareLog],
    now: DateTime<Local>,
) -> Option<i64> {
    last_watered(plant, logs).map(|ts| days_between(ts, now))
}

pub fn count_waterings(logs: &[CareLog]) -> usize {
    logs.iter().filter(|l| l.watered).count()
}
