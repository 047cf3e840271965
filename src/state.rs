use std::path::PathBuf;

use crate::color::MetricColors;
use crate::config::PipelineConfig;
use crate::data::catalog::list_industries;
use crate::data::loader::load_industry;
use crate::data::series::IndustrySeries;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Pipeline configuration (data root, filter constants, metric list).
    pub config: PipelineConfig,

    /// Industries discovered under the data root.
    pub industries: Vec<String>,

    /// Currently selected industry (None until the user picks one).
    pub selected_industry: Option<String>,

    /// Combined series for the selected industry, rebuilt on every selection.
    pub series: Option<IndustrySeries>,

    /// Line colour per metric.
    pub colors: MetricColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let config = PipelineConfig::default();
        let colors = MetricColors::new(&config.metrics);
        let mut state = Self {
            config,
            industries: Vec::new(),
            selected_industry: None,
            series: None,
            colors,
            status_message: None,
        };
        // Pick up ./industries when it exists so the app is usable without
        // any dialog interaction; otherwise wait for File → Open data folder.
        if state.config.root.is_dir() {
            state.refresh_catalog();
        }
        state
    }
}

impl AppState {
    /// Point the pipeline at a new data root and rebuild the catalog.
    pub fn set_root(&mut self, root: PathBuf) {
        self.config.root = root;
        self.refresh_catalog();
    }

    /// Replace the whole configuration (File → Load config…).
    pub fn set_config(&mut self, config: PipelineConfig) {
        self.config = config;
        self.colors = MetricColors::new(&self.config.metrics);
        self.refresh_catalog();
    }

    /// Re-scan the data root for industry subdirectories. A missing root is
    /// a configuration error and clears the catalog.
    pub fn refresh_catalog(&mut self) {
        match list_industries(&self.config.root) {
            Ok(industries) => {
                log::info!(
                    "Found {} industries under {}",
                    industries.len(),
                    self.config.root.display()
                );
                self.industries = industries;
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Catalog error: {e}");
                self.industries = Vec::new();
                self.status_message = Some(format!("Error: {e}"));
            }
        }
        self.selected_industry = None;
        self.series = None;
    }

    /// Run the full pipeline for one industry and replace the series.
    /// Everything is recomputed from scratch; nothing persists between
    /// selections.
    pub fn select_industry(&mut self, industry: &str) {
        match load_industry(&self.config, industry) {
            Ok(observations) => {
                let series = IndustrySeries::from_observations(observations);
                log::info!("Loaded {} series rows for '{industry}'", series.len());
                self.series = Some(series);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to load '{industry}': {e:#}");
                self.series = None;
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
        self.selected_industry = Some(industry.to_string());
    }
}
