// src/export/pdf_export.rs

use crate::core::week::WeekWindow;
use crate::errors::{AppError, AppResult};
use crate::export::model::{ReportStyle, WeekReport, build_report};
use crate::export::pdf::PdfManager;
use crate::models::{Department, Division, WeekDays};
use std::fs;
use std::path::{Path, PathBuf};

/// A rendered report, ready to be written.
#[derive(Debug, Clone)]
pub struct Document {
    /// Suggested file name, see [`crate::export::file_name`].
    pub file_name: String,
    pub bytes: Vec<u8>,
    /// The strings that were laid out, kept for callers and tests.
    pub report: WeekReport,
}

impl Document {
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.file_name)
    }

    pub fn write_to(&self, path: &Path) -> AppResult<()> {
        fs::write(path, &self.bytes)
            .map_err(|e| AppError::Export(format!("{}: {e}", path.display())))
    }
}

/// Lay out the week on a landscape page.
pub fn render_document(
    division: Division,
    department: Department,
    week: &WeekWindow,
    days: &WeekDays,
    style: &ReportStyle,
) -> Document {
    let report = build_report(division, department, week, days, style);

    let mut pdf = PdfManager::new();
    pdf.write_report(&report);

    Document {
        file_name: report.file_name.clone(),
        bytes: pdf.finish(),
        report,
    }
}
