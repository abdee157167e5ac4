//! Configuration file upgrades: detect keys missing from an older file and
//! fill them with defaults, never touching values the user already set.

use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Dotted paths of keys present in `defaults` but absent from `current`.
fn missing_keys(defaults: &Mapping, current: &Mapping, prefix: &str, out: &mut Vec<String>) {
    for (k, v) in defaults {
        let Some(name) = k.as_str() else { continue };
        let path = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{prefix}.{name}")
        };

        match (current.get(k), v) {
            (None, _) => out.push(path),
            (Some(Value::Mapping(cur)), Value::Mapping(def)) => {
                missing_keys(def, cur, &path, out)
            }
            _ => {}
        }
    }
}

/// Copy every key of `defaults` missing from `current`, recursively.
fn merge_defaults(defaults: &Mapping, current: &mut Mapping) {
    for (k, v) in defaults {
        match current.get_mut(k) {
            None => {
                current.insert(k.clone(), v.clone());
            }
            Some(Value::Mapping(cur)) => {
                if let Value::Mapping(def) = v {
                    merge_defaults(def, cur);
                }
            }
            Some(_) => {}
        }
    }
}

fn default_mapping() -> AppResult<Mapping> {
    let value = serde_yaml::to_value(Config::default())?;
    Ok(value.as_mapping().cloned().unwrap_or_default())
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)?;
    let value: Value = serde_yaml::from_str(&content)?;
    Ok(value.as_mapping().cloned().unwrap_or_default())
}

/// Keys the config file at `path` lacks compared with the current defaults.
pub fn check_config_file(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    let mut out = Vec::new();
    missing_keys(&default_mapping()?, &current, "", &mut out);
    Ok(out)
}

/// Fill missing keys with defaults. A `.bak` copy is written first.
/// Returns the keys that were added.
pub fn migrate_config_file(path: &Path) -> AppResult<Vec<String>> {
    let missing = check_config_file(path)?;
    if missing.is_empty() {
        info("Configuration file is up to date.");
        return Ok(missing);
    }

    let backup = path.with_extension("conf.bak");
    fs::copy(path, &backup)?;
    info(format!("Backup written to {}", backup.display()));

    let mut current = read_mapping(path)?;
    merge_defaults(&default_mapping()?, &mut current);
    fs::write(path, serde_yaml::to_string(&Value::Mapping(current))?)?;

    success(format!("Configuration migrated: {} key(s) added", missing.len()));
    Ok(missing)
}
