//! Weather-aware watering advisor.
//!
//! Turns forecast days into per-plant decisions: a day whose condition text
//! mentions rain means "don't water".

use crate::config::WeatherConfig;
use crate::db::store::{AuditLog, WeatherStore};
use crate::errors::{AppError, AppResult};
use crate::models::plant::Plant;
use crate::models::weather::{ForecastDay, WeatherDecision};
use regex::{Regex, RegexBuilder};

/// Case-insensitive matcher over the configured rain keywords.
pub struct RainMatcher {
    re: Option<Regex>,
}

impl RainMatcher {
    pub fn new(keywords: &[String]) -> AppResult<Self> {
        let alternatives: Vec<String> = keywords
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .map(regex::escape)
            .collect();

        if alternatives.is_empty() {
            return Ok(Self { re: None });
        }

        let re = RegexBuilder::new(&alternatives.join("|"))
            .case_insensitive(true)
            .build()
            .map_err(|e| AppError::Config(format!("invalid rain keyword: {e}")))?;

        Ok(Self { re: Some(re) })
    }

    pub fn is_rain(&self, condition: &str) -> bool {
        self.re.as_ref().is_some_and(|re| re.is_match(condition))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WeatherAlert {
    Cold { min_temp_c: f64 },
    Heat { max_temp_c: f64 },
}

impl WeatherAlert {
    pub fn message(&self) -> String {
        match self {
            WeatherAlert::Cold { min_temp_c } => {
                format!("Cold night expected ({min_temp_c:.1}°C): protect your plants ❄️")
            }
            WeatherAlert::Heat { max_temp_c } => {
                format!("Heat wave expected ({max_temp_c:.1}°C): keep your plants in the shade ☀️")
            }
        }
    }
}

/// Outcome of applying one forecast to the store.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub written: Vec<WeatherDecision>,
    pub kept_existing: usize,
    pub alert: Option<WeatherAlert>,
    /// Plants for which today is a good watering day.
    pub water_today: Vec<String>,
}

pub struct WeatherLogic;

impl WeatherLogic {
    pub fn decide(plant_id: i64, day: &ForecastDay, matcher: &RainMatcher) -> WeatherDecision {
        let should_water = !matcher.is_rain(&day.condition);
        WeatherDecision::new(plant_id, day.date, should_water, &day.condition)
    }

    /// Cold has priority over heat.
    pub fn extreme_alert(day: &ForecastDay, cfg: &WeatherConfig) -> Option<WeatherAlert> {
        if day.min_temp_c < cfg.cold_threshold_c {
            Some(WeatherAlert::Cold {
                min_temp_c: day.min_temp_c,
            })
        } else if day.max_temp_c > cfg.heat_threshold_c {
            Some(WeatherAlert::Heat {
                max_temp_c: day.max_temp_c,
            })
        } else {
            None
        }
    }

    /// Store decisions for every plant and forecast day.
    ///
    /// The first forecast day (today) is always refreshed; later days are
    /// written only when no decision exists yet for that plant and date.
    pub fn apply_forecast<S>(
        store: &S,
        plants: &[Plant],
        forecast: &[ForecastDay],
        cfg: &WeatherConfig,
    ) -> AppResult<CheckReport>
    where
        S: WeatherStore + AuditLog,
    {
        let matcher = RainMatcher::new(&cfg.rain_keywords)?;
        let mut report = CheckReport {
            alert: forecast.first().and_then(|d| Self::extreme_alert(d, cfg)),
            ..CheckReport::default()
        };

        for plant in plants {
            for (i, day) in forecast.iter().enumerate() {
                if i != 0 && store.decision_for_day(plant.id, &day.date)?.is_some() {
                    report.kept_existing += 1;
                    continue;
                }

                let decision = Self::decide(plant.id, day, &matcher);
                store.upsert_decision(&decision)?;

                if i == 0 && decision.should_water {
                    report.water_today.push(plant.name.clone());
                }
                report.written.push(decision);
            }
        }

        store.audit(
            "weather",
            &format!("{} plant(s)", plants.len()),
            &format!(
                "Stored {} decision(s), kept {} existing",
                report.written.len(),
                report.kept_existing
            ),
        );

        Ok(report)
    }
}
