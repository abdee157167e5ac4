// src/export/logic.rs

use crate::core::plant::PlantLogic;
use crate::db::store::{PlantStore, WeatherStore};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::csv::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::export::model::{LogExport, PlantExport};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use chrono::{DateTime, Local};

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the journal of one plant (`plant = Some(id)`) or of all plants.
    ///
    /// Returns the number of records written: log rows for CSV, plants for
    /// JSON. Nothing is written when there is nothing to export.
    pub fn export<S>(
        store: &S,
        format: ExportFormat,
        file: &str,
        plant: Option<i64>,
        force: bool,
        now: DateTime<Local>,
    ) -> AppResult<usize>
    where
        S: PlantStore + WeatherStore,
    {
        let path = expand_tilde(file);

        let plants = match plant {
            Some(id) => vec![PlantLogic::get(store, id)?],
            None => store.plants()?,
        };

        if plants.is_empty() {
            warning("No plants to export.");
            return Ok(0);
        }

        let mut data = Vec::with_capacity(plants.len());
        for p in plants {
            let summary = PlantLogic::status_of(store, &p, now)?;
            let mut logs = store.logs_for_plant(p.id)?;
            logs.sort_by_key(|l| (l.logged_at, l.id));
            data.push(PlantExport {
                plant: p,
                summary,
                logs,
            });
        }

        match format {
            ExportFormat::Csv => {
                let rows: Vec<LogExport> = data.iter().flat_map(|d| d.rows()).collect();
                if rows.is_empty() {
                    warning("No journal entries to export.");
                    return Ok(0);
                }
                ensure_writable(&path, force)?;
                export_csv(&rows, &path)?;
                Ok(rows.len())
            }
            ExportFormat::Json => {
                ensure_writable(&path, force)?;
                export_json(&data, &path)?;
                Ok(data.len())
            }
        }
    }
}
