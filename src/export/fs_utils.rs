// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Verifica se un file può essere creato o sovrascritto.
///
/// - file missing → Ok
/// - file present and `force` → Ok
/// - file present otherwise → ask on stdin, anything but y/yes cancels.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "cancelled, '{}' not overwritten",
            path.display()
        )))
    }
}

/// Resolve the output directory (`~/` allowed) and create it if needed.
pub(crate) fn prepare_output_dir(dir: &str) -> AppResult<PathBuf> {
    let path = expand_tilde(dir);
    if !path.exists() {
        fs::create_dir_all(&path)?;
        info(format!("Created output directory {}", path.display()));
    } else if !path.is_dir() {
        return Err(AppError::Export(format!(
            "output path is not a directory: {}",
            path.display()
        )));
    }
    Ok(path)
}
