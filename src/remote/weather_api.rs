//! weatherapi.com `forecast.json` client and payload parsing.

use crate::config::WeatherConfig;
use crate::errors::{AppError, AppResult};
use crate::models::weather::ForecastDay;
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    forecast: Forecast,
}

#[derive(Debug, Deserialize)]
struct Forecast {
    forecastday: Vec<ForecastDayDto>,
}

#[derive(Debug, Deserialize)]
struct ForecastDayDto {
    date: String,
    day: DayDto,
}

#[derive(Debug, Deserialize)]
struct DayDto {
    maxtemp_c: f64,
    mintemp_c: f64,
    condition: ConditionDto,
}

#[derive(Debug, Deserialize)]
struct ConditionDto {
    text: String,
}

/// Parse a `forecast.json` body into forecast days, in provider order.
pub fn parse_forecast(body: &str) -> AppResult<Vec<ForecastDay>> {
    let response: ForecastResponse = serde_json::from_str(body)?;

    response
        .forecast
        .forecastday
        .into_iter()
        .map(|d| {
            let date = NaiveDate::parse_from_str(&d.date, "%Y-%m-%d")
                .map_err(|_| AppError::Weather(format!("invalid forecast date '{}'", d.date)))?;
            Ok(ForecastDay {
                date,
                condition: d.day.condition.text,
                max_temp_c: d.day.maxtemp_c,
                min_temp_c: d.day.mintemp_c,
            })
        })
        .collect()
}

/// Fetch the forecast for the configured coordinates.
pub fn fetch_forecast(cfg: &WeatherConfig) -> AppResult<Vec<ForecastDay>> {
    if cfg.api_key.trim().is_empty() {
        return Err(AppError::Config(
            "weather.api_key is empty; set it with `plantlog config --edit`".into(),
        ));
    }

    let client = super::http_client()?;
    let url = format!("{}/forecast.json", cfg.base_url.trim_end_matches('/'));
    let query = format!("{},{}", cfg.latitude, cfg.longitude);
    let days = cfg.forecast_days.to_string();

    let response = client
        .get(url)
        .query(&[
            ("key", cfg.api_key.as_str()),
            ("q", query.as_str()),
            ("days", days.as_str()),
            ("lang", cfg.lang.as_str()),
        ])
        .send()?;

    let body = super::check_status(response)?.text()?;
    parse_forecast(&body)
}
