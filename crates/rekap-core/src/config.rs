//! Tracker configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default config file looked up in the working directory.
pub const CONFIG_FILE: &str = "rekap.toml";

/// Where the roster lives and where reports go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Directory holding the attendance and grades CSV files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Directory reports are written to.
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
    #[serde(default = "default_attendance_file")]
    pub attendance_file: String,
    #[serde(default = "default_grades_file")]
    pub grades_file: String,
    #[serde(default = "default_markdown_report")]
    pub markdown_report: String,
    #[serde(default = "default_html_report")]
    pub html_report: String,
    #[serde(default = "default_json_report")]
    pub json_report: String,
    /// Students with a final score strictly below this are listed as at risk.
    #[serde(default = "default_below_threshold")]
    pub below_threshold: f64,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}
fn default_out_dir() -> PathBuf {
    PathBuf::from("out")
}
fn default_attendance_file() -> String {
    "kehadiran.csv".to_string()
}
fn default_grades_file() -> String {
    "grades.csv".to_string()
}
fn default_markdown_report() -> String {
    "report.md".to_string()
}
fn default_html_report() -> String {
    "report.html".to_string()
}
fn default_json_report() -> String {
    "report.json".to_string()
}
fn default_below_threshold() -> f64 {
    70.0
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            out_dir: default_out_dir(),
            attendance_file: default_attendance_file(),
            grades_file: default_grades_file(),
            markdown_report: default_markdown_report(),
            html_report: default_html_report(),
            json_report: default_json_report(),
            below_threshold: default_below_threshold(),
        }
    }
}

impl TrackerConfig {
    pub fn attendance_path(&self) -> PathBuf {
        self.data_dir.join(&self.attendance_file)
    }

    pub fn grades_path(&self) -> PathBuf {
        self.data_dir.join(&self.grades_file)
    }

    pub fn markdown_path(&self) -> PathBuf {
        self.out_dir.join(&self.markdown_report)
    }

    pub fn html_path(&self) -> PathBuf {
        self.out_dir.join(&self.html_report)
    }

    pub fn json_path(&self) -> PathBuf {
        self.out_dir.join(&self.json_report)
    }

    /// Create the data and output directories if they do not exist.
    pub fn ensure_dirs(&self) -> Result<()> {
        for dir in [&self.data_dir, &self.out_dir] {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create directory {}", dir.display()))?;
        }
        Ok(())
    }
}

/// Load configuration from `rekap.toml` in the working directory, or defaults.
pub fn load_config() -> Result<TrackerConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or fall back to `rekap.toml` and then
/// the defaults.
///
/// Environment variable overrides: `REKAP_DATA_DIR`, `REKAP_OUT_DIR`.
pub fn load_config_from(path: Option<&Path>) -> Result<TrackerConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from(CONFIG_FILE);
            local.exists().then_some(local)
        }
    };

    let mut config = match config_path {
        Some(path) => parse_config_file(&path)?,
        None => TrackerConfig::default(),
    };

    if let Ok(dir) = std::env::var("REKAP_DATA_DIR") {
        config.data_dir = PathBuf::from(dir);
    }
    if let Ok(dir) = std::env::var("REKAP_OUT_DIR") {
        config.out_dir = PathBuf::from(dir);
    }

    anyhow::ensure!(
        config.below_threshold.is_finite(),
        "below_threshold must be a finite number"
    );

    Ok(config)
}

fn parse_config_file(path: &Path) -> Result<TrackerConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("failed to parse config: {}", path.display()))
}

/// Starter config written by `rekap init`.
pub const SAMPLE_CONFIG: &str = r#"# rekap configuration

data_dir = "data"
out_dir = "out"
attendance_file = "kehadiran.csv"
grades_file = "grades.csv"
markdown_report = "report.md"
html_report = "report.html"
json_report = "report.json"
below_threshold = 70.0
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = TrackerConfig::default();
        assert_eq!(config.attendance_path(), PathBuf::from("data/kehadiran.csv"));
        assert_eq!(config.grades_path(), PathBuf::from("data/grades.csv"));
        assert_eq!(config.markdown_path(), PathBuf::from("out/report.md"));
        assert_eq!(config.html_path(), PathBuf::from("out/report.html"));
        assert_eq!(config.below_threshold, 70.0);
    }

    #[test]
    fn sample_config_matches_defaults() {
        let parsed: TrackerConfig = toml::from_str(SAMPLE_CONFIG).unwrap();
        assert_eq!(parsed, TrackerConfig::default());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let parsed: TrackerConfig = toml::from_str(
            r#"
data_dir = "/srv/kelas-a"
below_threshold = 60
"#,
        )
        .unwrap();
        assert_eq!(parsed.data_dir, PathBuf::from("/srv/kelas-a"));
        assert_eq!(parsed.below_threshold, 60.0);
        assert_eq!(parsed.grades_file, "grades.csv");
        assert_eq!(parsed.out_dir, PathBuf::from("out"));
    }

    #[test]
    fn explicit_missing_path_fails() {
        let err = load_config_from(Some(Path::new("/nonexistent/rekap.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_path_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "out_dir = \"laporan\"\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        if std::env::var("REKAP_OUT_DIR").is_err() {
            assert_eq!(config.out_dir, PathBuf::from("laporan"));
        }
    }

    #[test]
    fn ensure_dirs_creates_both() {
        let dir = tempfile::tempdir().unwrap();
        let config = TrackerConfig {
            data_dir: dir.path().join("d"),
            out_dir: dir.path().join("o"),
            ..TrackerConfig::default()
        };
        config.ensure_dirs().unwrap();
        assert!(config.data_dir.is_dir());
        assert!(config.out_dir.is_dir());
    }
}
