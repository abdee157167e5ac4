use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Plant {
    pub id: i64,
    pub name: String,
    pub kind: String,                     // ⇔ plants.kind (species / type label)
    pub planted_at: DateTime<Local>,      // ⇔ plants.planted_at (TEXT, RFC3339)
    pub watering_interval: u32,           // ⇔ plants.watering_interval (days, >= 1)
    pub last_watered: Option<DateTime<Local>>, // NULL = never watered
    pub notes: String,
    pub reminder_active: bool,
    pub reminder_every_minutes: Option<i64>, // overrides the interval for scheduling only
}

impl Plant {
    /// Plant as created from the CLI, before the store assigns an id.
    pub fn new(
        name: &str,
        kind: &str,
        planted_at: DateTime<Local>,
        watering_interval: u32,
        notes: &str,
    ) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            kind: kind.to_string(),
            planted_at,
            watering_interval,
            last_watered: None,
            notes: notes.to_string(),
            reminder_active: false,
            reminder_every_minutes: None,
        }
    }

    pub fn planted_str(&self) -> String {
        self.planted_at.format("%Y-%m-%d").to_string()
    }

    pub fn last_watered_str(&self) -> String {
        match self.last_watered {
            Some(ts) => ts.format("%Y-%m-%d %H:%M").to_string(),
            None => "--".to_string(),
        }
    }
}
