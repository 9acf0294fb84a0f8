//! Survey configuration.
//!
//! Defaults, then an optional `survey.json` in the image root, then command
//! line overrides.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::SurveyError;
use crate::models::Variant;

pub const CONFIG_FILE_NAME: &str = "survey.json";
pub const IMAGE_ROOT_ENV: &str = "SURVEY_IMAGE_ROOT";

/// Folder name for each variant, relative to the image root
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FolderNames {
    pub reference: String,
    pub treatment_a: String,
    pub treatment_b: String,
}

impl Default for FolderNames {
    fn default() -> Self {
        Self {
            reference: "Original".to_string(),
            treatment_a: "Method A".to_string(),
            treatment_b: "Method B".to_string(),
        }
    }
}

/// Contents of `survey.json`; every field is optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ConfigFile {
    folders: FolderNames,
    output_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyConfig {
    pub image_root: PathBuf,
    pub folders: FolderNames,
    pub output_dir: PathBuf,
    pub log_file: PathBuf,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            image_root: PathBuf::from("."),
            folders: FolderNames::default(),
            output_dir: PathBuf::from("."),
            log_file: PathBuf::from("glare-survey.log"),
        }
    }
}

impl SurveyConfig {
    /// Defaults for `image_root`, overlaid with its `survey.json` if present.
    pub fn load(image_root: &Path) -> Result<Self, SurveyError> {
        let mut config = Self {
            image_root: image_root.to_path_buf(),
            ..Self::default()
        };

        let path = image_root.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(config);
        }

        let content = std::fs::read_to_string(&path).map_err(|source| SurveyError::Io {
            path: path.clone(),
            source,
        })?;
        let file: ConfigFile = serde_json::from_str(&content)
            .map_err(|source| SurveyError::Config { path: path.clone(), source })?;

        config.folders = file.folders;
        if let Some(dir) = file.output_dir {
            config.output_dir = dir;
        }
        Ok(config)
    }

    pub fn folder_for(&self, variant: Variant) -> PathBuf {
        let name = match variant {
            Variant::Reference => &self.folders.reference,
            Variant::TreatmentA => &self.folders.treatment_a,
            Variant::TreatmentB => &self.folders.treatment_b,
        };
        self.image_root.join(name)
    }
}

/// Image root from the command line, else the environment, else the
/// working directory.
pub fn resolve_image_root(cli: Option<PathBuf>, env: Option<OsString>) -> PathBuf {
    cli.or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let tmp = TempDir::new().unwrap();
        let config = SurveyConfig::load(tmp.path()).unwrap();
        assert_eq!(config.folders, FolderNames::default());
        assert_eq!(config.folder_for(Variant::TreatmentB), tmp.path().join("Method B"));
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_partial_file_overrides() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            r#"{ "folders": { "treatmentA": "dehaze" }, "outputDir": "results" }"#,
        )
        .unwrap();
        let config = SurveyConfig::load(tmp.path()).unwrap();
        assert_eq!(config.folders.reference, "Original");
        assert_eq!(config.folders.treatment_a, "dehaze");
        assert_eq!(config.output_dir, PathBuf::from("results"));
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE_NAME), "{ not json").unwrap();
        let result = SurveyConfig::load(tmp.path());
        assert!(matches!(result, Err(SurveyError::Config { .. })));
    }

    #[test]
    fn test_resolve_image_root_precedence() {
        assert_eq!(
            resolve_image_root(Some(PathBuf::from("cli")), Some(OsString::from("env"))),
            PathBuf::from("cli")
        );
        assert_eq!(
            resolve_image_root(None, Some(OsString::from("env"))),
            PathBuf::from("env")
        );
        assert_eq!(resolve_image_root(None, Some(OsString::new())), PathBuf::from("."));
        assert_eq!(resolve_image_root(None, None), PathBuf::from("."));
    }
}
