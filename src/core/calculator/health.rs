use crate::models::status::HealthStatus;

/// Days past the watering interval still reported as `Attention`.
pub const ATTENTION_GRACE_DAYS: i64 = 2;

/// Ordered classification, first match wins.
pub fn classify(days_since_watered: Option<i64>, watering_interval: u32) -> HealthStatus {
    let interval = i64::from(watering_interval);

    match days_since_watered {
        None => HealthStatus::NoData,
        Some(d) if d <= interval => HealthStatus::Healthy,
        Some(d) if d <= interval + ATTENTION_GRACE_DAYS => HealthStatus::Attention,
        Some(_) => HealthStatus::Critical,
    }
}
