use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Photo {
    pub id: i64,
    pub plant_id: i64,
    pub uri: String,
    pub taken_at: DateTime<Local>,
}
