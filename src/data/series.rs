use std::collections::BTreeMap;

use super::model::{Metric, Observation, SeriesPoint};

// ---------------------------------------------------------------------------
// IndustrySeries – the combined long-form table
// ---------------------------------------------------------------------------

/// The combined (Year, Metric, Value, YoY) table for one industry, sorted
/// ascending by year. Immutable once built; a new selection builds a new one.
#[derive(Debug, Clone, Default)]
pub struct IndustrySeries {
    points: Vec<SeriesPoint>,
}

impl IndustrySeries {
    /// Build the series from raw observations: stable sort by year, then
    /// attach the year-over-year percentage change per metric group.
    ///
    /// The first row of each metric group has no change. Two files claiming
    /// the same year both keep their rows; the later one's change is computed
    /// against the earlier, mirroring the source data's behavior.
    pub fn from_observations(mut observations: Vec<Observation>) -> Self {
        observations.sort_by_key(|o| o.year);

        let mut previous: BTreeMap<Metric, f64> = BTreeMap::new();
        let points = observations
            .into_iter()
            .map(|o| {
                let yoy_change = previous
                    .insert(o.metric, o.value)
                    .map(|prev| (o.value - prev) / prev * 100.0);
                SeriesPoint {
                    year: o.year,
                    metric: o.metric,
                    value: o.value,
                    yoy_change,
                }
            })
            .collect();

        Self { points }
    }

    /// Rows belonging to one metric, in year order.
    pub fn metric_points(&self, metric: Metric) -> impl Iterator<Item = &SeriesPoint> {
        self.points.iter().filter(move |p| p.metric == metric)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
