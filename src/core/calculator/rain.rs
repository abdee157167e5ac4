use crate::models::weather::WeatherDecision;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RainInfo {
    pub rain_detected: usize,
    pub watering_avoided: usize,
}

/// Both counters are the number of days the advisor said "don't water".
pub fn analyze_rain(history: &[WeatherDecision]) -> RainInfo {
    let skipped = history.iter().filter(|d| !d.should_water).count();

    RainInfo {
        rain_detected: skipped,
        watering_avoided: skipped,
    }
}
