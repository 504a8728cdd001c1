use crate::config::Config;
use crate::core::validate::validate;
use crate::core::week::resolve_week_or_today;
use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_writable, prepare_output_dir};
use crate::export::{Document, notify_export_success, render_document};
use crate::models::WeekPlan;
use crate::ui::messages::info;
use std::path::PathBuf;

/// Logica di alto livello per la generazione del report.
pub struct GenerateLogic;

impl GenerateLogic {
    /// Validate the plan and render it. Nothing is written.
    pub fn render(plan: &WeekPlan, cfg: &Config) -> AppResult<Document> {
        let (division, department) = validate(plan)?;
        let week = resolve_week_or_today(plan.date)?;

        Ok(render_document(
            division,
            department,
            &week,
            &plan.days,
            &cfg.report_style(),
        ))
    }

    /// Validation gate → render → save under the deterministic file name.
    ///
    /// `out_dir` overrides `cfg.output_dir`. Returns the written path.
    pub fn generate(
        plan: &WeekPlan,
        cfg: &Config,
        out_dir: Option<&str>,
        force: bool,
    ) -> AppResult<PathBuf> {
        let doc = Self::render(plan, cfg)?;

        let dir = prepare_output_dir(out_dir.unwrap_or(&cfg.output_dir))?;
        let path = doc.path_in(&dir);

        ensure_writable(&path, force)?;
        info(format!(
            "Writing {} ({} of 7 days filled)",
            doc.file_name,
            plan.days.filled_count()
        ));
        doc.write_to(&path)?;

        notify_export_success(&path, plan.pictures.len());
        Ok(path)
    }
}
