use crate::errors::AppResult;
use crate::export::{PlantExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Pretty-printed JSON export.
pub(crate) fn export_json(plants: &[PlantExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(plants)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}
