use std::fs;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::errors::{Result, SitefixError};

/// Looked up in the site root when no `--config` is passed.
pub const CONFIG_FILE_NAME: &str = "sitefix.yaml";

pub const DEFAULT_PAGES: [&str; 5] = [
    "index.html",
    "about.html",
    "impact.html",
    "contact.html",
    "transparency.html",
];
pub const DEFAULT_STYLESHEET: &str = "css/i18n.css";
pub const DEFAULT_COMPONENTS_SCRIPT: &str = "js/components.js";

/// Where the site lives and which of its files the rewrites touch.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, JsonSchema, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Site root. Every other path is relative to it.
    pub root: PathBuf,

    /// HTML pages rewritten by both passes.
    #[validate(length(min = 1), custom = "validate_file_names")]
    pub pages: Vec<String>,

    /// Stylesheet carrying the RTL section.
    #[validate(length(min = 1))]
    pub stylesheet: String,

    /// Script whose navbar selectors get patched.
    #[validate(length(min = 1))]
    pub components_script: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            pages: DEFAULT_PAGES.iter().map(|p| p.to_string()).collect(),
            stylesheet: DEFAULT_STYLESHEET.to_string(),
            components_script: DEFAULT_COMPONENTS_SCRIPT.to_string(),
        }
    }
}

#[allow(clippy::ptr_arg)]
fn validate_file_names(names: &Vec<String>) -> std::result::Result<(), ValidationError> {
    if names.iter().any(|n| n.trim().is_empty()) {
        let mut err = ValidationError::new("empty_file_name");
        err.message = Some("file names must not be empty".into());
        return Err(err);
    }
    Ok(())
}

impl SiteConfig {
    /// Load the config for a site.
    ///
    /// An explicit `config_path` must exist. Without one, `<root>/sitefix.yaml`
    /// is read when present and the built-in defaults are used otherwise.
    /// A `root` argument always wins over the root named in the file.
    pub fn load(root: Option<&Path>, config_path: Option<&Path>) -> Result<Self> {
        let base = root.map_or_else(|| PathBuf::from("."), Path::to_path_buf);

        let file = match config_path {
            Some(path) if !path.exists() => {
                return Err(SitefixError::ConfigNotFound(path.to_path_buf()))
            }
            Some(path) => Some(path.to_path_buf()),
            None => Some(base.join(CONFIG_FILE_NAME)).filter(|p| p.is_file()),
        };

        let mut config = match file {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading site config");
                let content =
                    fs::read_to_string(&path).map_err(|e| SitefixError::file(&path, e))?;
                Self::from_yaml(&content)?
            }
            None => SiteConfig::default(),
        };

        if let Some(root) = root {
            config.root = root.to_path_buf();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(SiteConfig::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn page_paths(&self) -> Vec<PathBuf> {
        self.pages.iter().map(|p| self.root.join(p)).collect()
    }

    pub fn stylesheet_path(&self) -> PathBuf {
        self.root.join(&self.stylesheet)
    }

    pub fn components_script_path(&self) -> PathBuf {
        self.root.join(&self.components_script)
    }

    pub fn json_schema() -> Result<String> {
        let schema = schemars::schema_for!(SiteConfig);
        Ok(serde_json::to_string_pretty(&schema)?)
    }
}
