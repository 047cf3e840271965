/// Data layer: catalog discovery, CSV loading, and series building.
///
/// Pipeline (one full run per industry selection):
/// ```text
///  <root>/<industry>/<year>.csv
///        │
///        ▼
///   ┌──────────┐
///   │ catalog   │  list industry subdirectories
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ loader    │  parse + filter rows → Vec<Observation>
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ IndustrySeries │  sort by year, attach YoY change per metric
///   └───────────────┘
/// ```
pub mod catalog;
pub mod loader;
pub mod model;
pub mod series;
