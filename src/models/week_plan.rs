use crate::errors::{AppError, AppResult};
use crate::models::choice::Choice;
use crate::models::day_record::{DayPatch, WeekDays};
use crate::models::department::Department;
use crate::models::division::Division;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Image extensions accepted by `attach`. Files are counted, never read.
const PICTURE_EXTENSIONS: [&str; 8] = ["png", "jpg", "jpeg", "gif", "bmp", "webp", "heic", "tiff"];

/// The form behind a report: selections, reference date and seven days.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WeekPlan {
    #[serde(default)]
    pub division: Option<Division>,
    #[serde(default)]
    pub department: Option<Department>,
    /// Any day of the reported week; today when absent.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub days: WeekDays,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pictures: Vec<String>,
}

impl WeekPlan {
    pub fn new(
        division: Option<Division>,
        department: Option<Department>,
        date: Option<NaiveDate>,
    ) -> Self {
        Self {
            division,
            department,
            date,
            ..Default::default()
        }
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        let plan: WeekPlan = serde_yaml::from_str(&content)?;
        plan.check_vocabulary()?;
        Ok(plan)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Copy of the plan with day `index` patched; literal choices must come
    /// from the department's vocabulary.
    pub fn with_day(&self, index: usize, patch: &DayPatch) -> AppResult<Self> {
        let mut patch = patch.clone();
        patch.activity = self.canonical_activity(patch.activity)?;
        patch.tools = self.canonical_tool(patch.tools)?;

        Ok(Self {
            days: self.days.with_day(index, &patch)?,
            ..self.clone()
        })
    }

    pub fn with_cleared_day(&self, index: usize) -> AppResult<Self> {
        Ok(Self {
            days: self.days.cleared(index)?,
            ..self.clone()
        })
    }

    /// Record picture paths. Only the extension is looked at.
    pub fn with_pictures<I, S>(&self, paths: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pictures = self.pictures.clone();
        for p in paths {
            let p = p.as_ref();
            if !is_picture(p) {
                return Err(AppError::InvalidPicture(p.to_string()));
            }
            pictures.push(p.to_string());
        }

        Ok(Self {
            pictures,
            ..self.clone()
        })
    }

    /// Every literal activity/tool must belong to the selected department.
    pub fn check_vocabulary(&self) -> AppResult<()> {
        for day in self.days.iter() {
            self.canonical_activity(day.activity.clone())?;
            self.canonical_tool(day.tools.clone())?;
        }
        Ok(())
    }

    fn canonical_activity(&self, choice: Option<Choice>) -> AppResult<Option<Choice>> {
        match (choice, self.department) {
            (Some(Choice::Literal(v)), Some(dep)) => dep
                .find_activity(&v)
                .map(|a| Some(Choice::literal(a)))
                .ok_or_else(|| AppError::UnknownActivity {
                    department: dep.to_string(),
                    value: v,
                }),
            (other, _) => Ok(other),
        }
    }

    fn canonical_tool(&self, choice: Option<Choice>) -> AppResult<Option<Choice>> {
        match (choice, self.department) {
            (Some(Choice::Literal(v)), Some(dep)) => dep
                .find_tool(&v)
                .map(|t| Some(Choice::literal(t)))
                .ok_or_else(|| AppError::UnknownTool {
                    department: dep.to_string(),
                    value: v,
                }),
            (other, _) => Ok(other),
        }
    }
}

fn is_picture(path: &str) -> bool {
    Path::new(path)
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|e| PICTURE_EXTENSIONS.contains(&e.as_str()))
}
