use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub mod migrate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_watering_interval")]
    pub default_watering_interval: u32,
    #[serde(default)]
    pub weather: WeatherConfig,
    #[serde(default)]
    pub assistant: AssistantConfig,
}

/// Forecast provider (weatherapi.com compatible) and decision thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub api_key: String,
    pub base_url: String,
    pub latitude: f64,
    pub longitude: f64,
    pub forecast_days: u8,
    pub lang: String,
    pub rain_keywords: Vec<String>,
    pub cold_threshold_c: f64,
    pub heat_threshold_c: f64,
}

/// OpenAI-compatible chat completions endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub history_logs: usize,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_watering_interval() -> u32 {
    3
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.weatherapi.com/v1".to_string(),
            latitude: 10.3666,
            longitude: -84.5772,
            forecast_days: 2,
            lang: "es".to_string(),
            rain_keywords: ["lluvia", "llovizna", "chubasco", "rain", "drizzle", "shower"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            cold_threshold_c: 10.0,
            heat_threshold_c: 32.0,
        }
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.deepseek.com".to_string(),
            model: "deepseek-chat".to_string(),
            max_tokens: 1024,
            temperature: 0.7,
            history_logs: 10,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_watering_interval: default_watering_interval(),
            weather: WeatherConfig::default(),
            assistant: AssistantConfig::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.plantlog`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".plantlog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("plantlog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("plantlog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize configuration and database files.
    /// Returns the resolved database path.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = crate::utils::path::expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            config.save()?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(config.database)
    }

    /// Basic sanity checks on values serde cannot express.
    pub fn validate(&self) -> AppResult<()> {
        if self.default_watering_interval < 1 {
            return Err(AppError::Config(
                "default_watering_interval must be at least 1".into(),
            ));
        }
        if self.weather.forecast_days == 0 {
            return Err(AppError::Config("weather.forecast_days must be at least 1".into()));
        }
        Ok(())
    }
}
