use crate::db::log::audit_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::confirm;
use crate::ui::messages::{info, success, warning};
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest_file`, optionally as a zip archive.
    ///
    /// Returns the final path, or `None` when the user declined to
    /// overwrite an existing file.
    pub fn backup(
        db_path: &str,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let src = Path::new(db_path);
        let dest = expand_tilde(dest_file);

        if !src.exists() {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )));
        }

        let pool = DbPool::new(db_path)?;

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if dest.exists() && !force {
            warning(format!("The file '{}' already exists.", dest.display()));
            if !confirm("Overwrite?")? {
                info("Backup cancelled.");
                return Ok(None);
            }
        }

        // Flush the WAL so the copied file is self-contained.
        pool.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")
            .ok();

        fs::copy(src, &dest)?;
        success(format!("Backup created: {}", dest.display()));

        let final_path = if compress {
            let compressed = compress_backup(&dest)?;
            if let Err(e) = fs::remove_file(&dest) {
                warning(format!("Failed to remove uncompressed backup: {}", e));
            }
            compressed
        } else {
            dest
        };

        audit_quiet(
            &pool.conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(Some(final_path))
    }
}

/// Zip (deflate) a backup next to itself.
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "plantlog.sqlite".to_string());

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name, options)?;
    std::io::copy(&mut f, &mut zip)?;
    zip.finish()?;

    info(format!("Compressed: {}", zip_path.display()));
    Ok(zip_path)
}
