use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Metric;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: metric → Color32
// ---------------------------------------------------------------------------

/// Assigns each charted metric a distinct line colour.
#[derive(Debug, Clone, Default)]
pub struct MetricColors {
    mapping: BTreeMap<Metric, Color32>,
}

impl MetricColors {
    /// Build a colour map for the configured metrics, in chart order.
    pub fn new(metrics: &[Metric]) -> Self {
        let palette = generate_palette(metrics.len());
        let mapping = metrics.iter().copied().zip(palette).collect();
        MetricColors { mapping }
    }

    /// Look up the colour for a metric.
    pub fn color_for(&self, metric: Metric) -> Color32 {
        self.mapping
            .get(&metric)
            .copied()
            .unwrap_or(Color32::LIGHT_BLUE)
    }
}
