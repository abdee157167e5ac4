use chrono::{DateTime, Local};

/// A pending watering reminder. One per plant; rescheduling replaces it.
#[derive(Debug, Clone)]
pub struct Reminder {
    pub id: i64,
    pub plant_id: i64,
    pub plant_name: String,
    pub due_at: DateTime<Local>,
}

impl Reminder {
    pub fn is_due(&self, now: DateTime<Local>) -> bool {
        self.due_at <= now
    }
}
