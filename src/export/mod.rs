// src/export/mod.rs

pub(crate) mod fs_utils;
pub mod layout;
mod model;
mod pdf;
mod pdf_export;

pub use model::{ReportStyle, WeekReport, file_name};
pub use pdf_export::{Document, render_document};

use crate::ui::messages::success;
use std::path::Path;

/// Helper comune per il messaggio di fine export.
pub(crate) fn notify_export_success(path: &Path, pictures: usize) {
    success(format!("PDF generated successfully: {}", path.display()));
    if pictures > 0 {
        success(format!("{pictures} picture(s) to attach alongside the report"));
    }
}
