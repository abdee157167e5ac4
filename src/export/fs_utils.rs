// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::Path;

/// Ask a yes/no question on stdin. Anything but "y"/"yes" is a no.
pub(crate) fn confirm(question: &str) -> AppResult<bool> {
    print!("{question} [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    Ok(ans == "y" || ans == "yes")
}

/// Checks whether `path` may be created or overwritten.
///
/// - missing file: ok
/// - existing file with `force`: ok
/// - existing file without `force`: the user is asked.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    if confirm("Overwrite?")? {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing file not overwritten".into(),
        ))
    }
}
