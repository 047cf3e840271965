use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::model::Metric;

// ---------------------------------------------------------------------------
// Pipeline configuration
// ---------------------------------------------------------------------------

/// Everything the load/reshape pipeline needs, passed in explicitly so tests
/// can substitute the filter constants and metric list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Root directory containing one subdirectory per industry.
    pub root: PathBuf,

    /// Geographic scope a row must match (`area_title` column).
    #[serde(default = "default_area_title")]
    pub area_title: String,

    /// Ownership class a row must match (`own_title` column).
    #[serde(default = "default_own_title")]
    pub own_title: String,

    /// Metric columns to extract, in chart order.
    #[serde(default = "default_metrics")]
    pub metrics: Vec<Metric>,
}

fn default_area_title() -> String {
    "U.S. TOTAL".to_string()
}

fn default_own_title() -> String {
    "Private".to_string()
}

fn default_metrics() -> Vec<Metric> {
    Metric::ALL.to_vec()
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("industries"),
            area_title: default_area_title(),
            own_title: default_own_title(),
            metrics: default_metrics(),
        }
    }
}

impl PipelineConfig {
    /// Load a configuration from a JSON file (File → Load config…).
    /// Missing fields fall back to the defaults above.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).context("reading config file")?;
        serde_json::from_str(&text).context("parsing config JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_source_constants() {
        let cfg = PipelineConfig::default();
        assert_eq!(cfg.area_title, "U.S. TOTAL");
        assert_eq!(cfg.own_title, "Private");
        assert_eq!(cfg.metrics, Metric::ALL.to_vec());
    }

    #[test]
    fn json_file_overrides_constants() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "root": "/data/industries",
                "area_title": "California",
                "metrics": ["annual_avg_emplvl"]
            }}"#
        )
        .unwrap();

        let cfg = PipelineConfig::from_json_file(file.path()).unwrap();
        assert_eq!(cfg.root, PathBuf::from("/data/industries"));
        assert_eq!(cfg.area_title, "California");
        // Unspecified fields keep their defaults.
        assert_eq!(cfg.own_title, "Private");
        assert_eq!(cfg.metrics, vec![Metric::EmploymentLevel]);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(PipelineConfig::from_json_file(file.path()).is_err());
    }
}
