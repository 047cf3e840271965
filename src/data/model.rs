use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Metric – one of the tracked employment statistics
// ---------------------------------------------------------------------------

/// The employment statistics we chart, each backed by one numeric column in
/// the yearly QCEW-style CSV snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Metric {
    #[serde(rename = "annual_avg_wkly_wage")]
    WeeklyWage,
    #[serde(rename = "avg_annual_pay")]
    AnnualPay,
    #[serde(rename = "annual_avg_emplvl")]
    EmploymentLevel,
}

impl Metric {
    pub const ALL: [Metric; 3] = [
        Metric::WeeklyWage,
        Metric::AnnualPay,
        Metric::EmploymentLevel,
    ];

    /// Column name in the source CSV files.
    pub fn column(&self) -> &'static str {
        match self {
            Metric::WeeklyWage => "annual_avg_wkly_wage",
            Metric::AnnualPay => "avg_annual_pay",
            Metric::EmploymentLevel => "annual_avg_emplvl",
        }
    }

    /// Human-readable name for chart headings and tooltips.
    pub fn title(&self) -> &'static str {
        match self {
            Metric::WeeklyWage => "Annual Avg Weekly Wage",
            Metric::AnnualPay => "Avg Annual Pay",
            Metric::EmploymentLevel => "Annual Avg Employment Level",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

// ---------------------------------------------------------------------------
// Observation – one extracted cell from a yearly snapshot
// ---------------------------------------------------------------------------

/// A single (Year, Metric, Value) cell pulled out of a filtered CSV row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub year: i32,
    pub metric: Metric,
    pub value: f64,
}

// ---------------------------------------------------------------------------
// SeriesPoint – one row of the combined long-form table
// ---------------------------------------------------------------------------

/// An observation with its year-over-year percentage change attached.
/// `yoy_change` is `None` for the earliest row of a metric group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub year: i32,
    pub metric: Metric,
    pub value: f64,
    pub yoy_change: Option<f64>,
}
