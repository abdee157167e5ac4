use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Expense {
    pub id: i64,
    pub plant_id: i64,
    pub spent_at: DateTime<Local>,
    pub amount: f64,
    pub note: Option<String>,
}
