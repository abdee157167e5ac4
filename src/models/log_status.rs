use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogStatus {
    Watering,
    Growth,
    Fertilizer,
    Note,
}

impl LogStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            LogStatus::Watering => "WATERING",
            LogStatus::Growth => "GROWTH",
            LogStatus::Fertilizer => "FERTILIZER",
            LogStatus::Note => "NOTE",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "WATERING" => Some(LogStatus::Watering),
            "GROWTH" => Some(LogStatus::Growth),
            "FERTILIZER" => Some(LogStatus::Fertilizer),
            "NOTE" => Some(LogStatus::Note),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (W/G/F/N or full name, any case)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "W" => Some(LogStatus::Watering),
            "G" => Some(LogStatus::Growth),
            "F" => Some(LogStatus::Fertilizer),
            "N" => Some(LogStatus::Note),
            other => LogStatus::from_db_str(other),
        }
    }

    /// Status implied by the content of an entry when none is given.
    pub fn infer(watered: bool, height_cm: f64, fertilizer: Option<&str>) -> Self {
        if watered {
            LogStatus::Watering
        } else if height_cm > 0.0 {
            LogStatus::Growth
        } else if fertilizer.is_some_and(|f| !f.trim().is_empty()) {
            LogStatus::Fertilizer
        } else {
            LogStatus::Note
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LogStatus::Watering => "watering",
            LogStatus::Growth => "growth",
            LogStatus::Fertilizer => "fertilizer",
            LogStatus::Note => "note",
        }
    }
}
