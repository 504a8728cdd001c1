use crate::errors::{AppError, AppResult};
use crate::export::ReportStyle;
use crate::models::Division;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where generated PDFs go (`~/` allowed).
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Letterhead name, top-left of the page. Empty hides it.
    #[serde(default = "default_organization")]
    pub organization: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    #[serde(default = "default_picture_placeholder")]
    pub picture_placeholder: String,
    /// Used by `new` when --division is not given.
    #[serde(default)]
    pub default_division: Option<Division>,
}

fn default_output_dir() -> String {
    ".".to_string()
}
fn default_organization() -> String {
    "7HILLS".to_string()
}
fn default_tagline() -> String {
    "Clean streets, Green City".to_string()
}
fn default_picture_placeholder() -> String {
    "See attached".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            organization: default_organization(),
            tagline: default_tagline(),
            picture_placeholder: default_picture_placeholder(),
            default_division: None,
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rworkplan")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rworkplan")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworkplan.conf")
    }

    /// Load configuration from `path` (or the standard file), defaults if missing.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Write the configuration, creating the parent directory.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Letterhead and placeholder settings for the renderer.
    pub fn report_style(&self) -> ReportStyle {
        ReportStyle {
            organization: non_empty(&self.organization),
            tagline: non_empty(&self.tagline),
            picture_placeholder: self.picture_placeholder.clone(),
        }
    }
}
