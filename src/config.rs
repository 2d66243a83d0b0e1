//! Project configuration loader for describing the static export layout.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::project::ExportLayout;

const DEFAULT_CONFIG_FILE: &str = "export.config.json";

/// Discoverable project configuration describing the export output layout.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Relative path from the project root to the exporter's output.
    pub out_dir: String,
    /// Top-level HTML files emitted by the exporter.
    pub page_files: Vec<String>,
    /// Subdirectories of the output whose `.html` files should be rewritten.
    pub page_subdirs: Vec<String>,
    /// Directory name containing framework chunks and runtime assets.
    pub framework_asset_dir: String,
    /// Media route names referenced from markup at the site root.
    pub media_routes: Vec<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            out_dir: "./out".into(),
            page_files: vec![
                "index.html".into(),
                "404.html".into(),
                "placeholder-generator.html".into(),
            ],
            page_subdirs: vec!["404".into()],
            framework_asset_dir: "_next".into(),
            media_routes: vec!["images".into(), "videos".into()],
        }
    }
}

impl ProjectConfig {
    /// Attempt to load configuration from the provided directory.
    ///
    /// When the configuration file does not exist or fails to parse we fall
    /// back to default values so downstream callers can continue operating
    /// with the exporter's conventional layout.
    pub fn discover(project_dir: &Path) -> Self {
        let candidate = project_dir.join(DEFAULT_CONFIG_FILE);
        Self::from_path(&candidate).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Convert the configuration into an owned layout description.
    pub fn into_layout(self) -> ExportLayout {
        ExportLayout {
            out_dir: self.out_dir,
            page_files: self.page_files,
            page_subdirs: self.page_subdirs,
            framework_asset_dir: self.framework_asset_dir,
            media_routes: self.media_routes,
        }
    }

    /// Path of the output directory relative to the project root.
    pub fn out_dir_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.out_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_layout_matches_exporter_conventions() {
        let layout = ProjectConfig::default().into_layout();
        assert_eq!(layout.out_dir, "./out");
        assert_eq!(layout.page_files, vec![
            "index.html".to_string(),
            "404.html".to_string(),
            "placeholder-generator.html".to_string(),
        ]);
        assert_eq!(layout.page_subdirs, vec!["404".to_string()]);
        assert_eq!(layout.framework_asset_dir, "_next");
        assert_eq!(layout.media_routes, vec![
            "images".to_string(),
            "videos".to_string()
        ]);
    }

    #[test]
    fn from_path_reads_overrides() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(
            &path,
            r#"{"out_dir": "dist", "page_subdirs": ["404", "errors"]}"#,
        )
        .unwrap();

        let config = ProjectConfig::from_path(&path).unwrap();
        assert_eq!(config.out_dir, "dist");
        assert_eq!(config.page_subdirs, vec![
            "404".to_string(),
            "errors".to_string()
        ]);
        assert_eq!(config.framework_asset_dir, "_next");
    }

    #[test]
    fn discover_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let config = ProjectConfig::discover(dir.path());
        assert_eq!(config.out_dir, "./out");
    }

    #[test]
    fn discover_ignores_unparseable_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "not json").unwrap();

        let config = ProjectConfig::discover(dir.path());
        assert_eq!(config.out_dir, "./out");
    }

    #[test]
    fn out_dir_path_joins_project_root() {
        let config = ProjectConfig::default();
        let path = config.out_dir_path(Path::new("/srv/site"));
        assert_eq!(path, PathBuf::from("/srv/site/./out"));
    }
}
