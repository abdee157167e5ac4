use crate::errors::AppResult;
use crate::export::{LogExport, notify_export_success};
use crate::ui::messages::info;
use std::path::Path;

/// CSV export, header row derived from `LogExport` via serde.
pub(crate) fn export_csv(rows: &[LogExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
