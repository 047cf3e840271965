use std::path::Path;

use anyhow::{Context, Result};

use super::model::{Metric, Observation};
use crate::config::PipelineConfig;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load every yearly CSV snapshot for one industry and extract the configured
/// metric columns from rows matching the geographic/ownership filter.
///
/// Each file is best-effort: a file whose name has no leading year, whose
/// header lacks the filter columns, or which fails to parse is skipped with a
/// warning and never aborts the rest of the industry.
pub fn load_industry(config: &PipelineConfig, industry: &str) -> Result<Vec<Observation>> {
    let dir = config.root.join(industry);
    let entries = std::fs::read_dir(&dir)
        .with_context(|| format!("reading industry directory {}", dir.display()))?;

    let mut observations = Vec::new();
    for entry in entries {
        let entry = entry.context("reading directory entry")?;
        let path = entry.path();

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        if ext != "csv" {
            continue;
        }

        let Some(year) = year_from_filename(&path) else {
            log::warn!(
                "Skipping {}: file name does not start with a year",
                path.display()
            );
            continue;
        };

        match load_year_file(&path, year, config) {
            Ok(mut obs) => observations.append(&mut obs),
            Err(e) => log::warn!("Skipping {}: {e:#}", path.display()),
        }
    }

    Ok(observations)
}

/// Year = the token before the first `.` in the file name, e.g. `2021.csv`
/// or `2021.annual.csv`.
fn year_from_filename(path: &Path) -> Option<i32> {
    let name = path.file_name()?.to_str()?;
    name.split('.').next()?.parse().ok()
}

// ---------------------------------------------------------------------------
// Per-file extraction
// ---------------------------------------------------------------------------

/// Parse one yearly snapshot. Rows are kept when `area_title` and `own_title`
/// match the configured constants; each configured metric column present in
/// the header contributes one [`Observation`] per kept row. Metric columns
/// the file does not have are skipped without affecting the others.
fn load_year_file(path: &Path, year: i32, config: &PipelineConfig) -> Result<Vec<Observation>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let area_idx = headers
        .iter()
        .position(|h| h == "area_title")
        .context("CSV missing 'area_title' column")?;
    let own_idx = headers
        .iter()
        .position(|h| h == "own_title")
        .context("CSV missing 'own_title' column")?;

    let metric_cols: Vec<(Metric, usize)> = config
        .metrics
        .iter()
        .filter_map(|&m| {
            headers
                .iter()
                .position(|h| h == m.column())
                .map(|idx| (m, idx))
        })
        .collect();

    if metric_cols.is_empty() {
        log::warn!("{}: no recognized metric columns", path.display());
        return Ok(Vec::new());
    }

    let mut observations = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        if record.get(area_idx).unwrap_or("") != config.area_title
            || record.get(own_idx).unwrap_or("") != config.own_title
        {
            continue;
        }

        for &(metric, idx) in &metric_cols {
            let raw = record.get(idx).unwrap_or("").trim();
            match raw.parse::<f64>() {
                Ok(value) => observations.push(Observation {
                    year,
                    metric,
                    value,
                }),
                Err(_) => log::debug!(
                    "{} row {row_no}: '{raw}' is not numeric for {}",
                    path.display(),
                    metric.column()
                ),
            }
        }
    }

    Ok(observations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const FULL_HEADER: &str =
        "area_title,own_title,annual_avg_wkly_wage,avg_annual_pay,annual_avg_emplvl";

    fn setup(files: &[(&str, &str)]) -> (TempDir, PipelineConfig) {
        let dir = tempfile::tempdir().unwrap();
        let industry = dir.path().join("retail");
        std::fs::create_dir(&industry).unwrap();
        for (name, contents) in files {
            std::fs::write(industry.join(name), contents).unwrap();
        }
        let config = PipelineConfig {
            root: dir.path().to_path_buf(),
            ..PipelineConfig::default()
        };
        (dir, config)
    }

    fn values_for(observations: &[Observation], metric: Metric) -> Vec<(i32, f64)> {
        let mut v: Vec<(i32, f64)> = observations
            .iter()
            .filter(|o| o.metric == metric)
            .map(|o| (o.year, o.value))
            .collect();
        v.sort_by_key(|&(year, _)| year);
        v
    }

    #[test]
    fn extracts_all_metrics_from_matching_rows() {
        let contents = format!("{FULL_HEADER}\nU.S. TOTAL,Private,900,46800,1200\n");
        let (_dir, config) = setup(&[("2020.csv", &contents)]);

        let obs = load_industry(&config, "retail").unwrap();
        assert_eq!(obs.len(), 3);
        assert_eq!(values_for(&obs, Metric::WeeklyWage), [(2020, 900.0)]);
        assert_eq!(values_for(&obs, Metric::AnnualPay), [(2020, 46800.0)]);
        assert_eq!(values_for(&obs, Metric::EmploymentLevel), [(2020, 1200.0)]);
    }

    #[test]
    fn filter_excludes_non_matching_rows() {
        let contents = format!(
            "{FULL_HEADER}\n\
             U.S. TOTAL,Private,900,46800,1200\n\
             California,Private,999,50000,400\n\
             U.S. TOTAL,Federal Government,800,41000,300\n"
        );
        let (_dir, config) = setup(&[("2020.csv", &contents)]);

        let obs = load_industry(&config, "retail").unwrap();
        assert_eq!(obs.len(), 3);
        assert!(obs.iter().all(|o| o.year == 2020));
        assert_eq!(values_for(&obs, Metric::WeeklyWage), [(2020, 900.0)]);
    }

    #[test]
    fn missing_metric_column_does_not_affect_the_others() {
        let with_all = format!("{FULL_HEADER}\nU.S. TOTAL,Private,900,46800,1200\n");
        let without_pay = "area_title,own_title,annual_avg_wkly_wage,annual_avg_emplvl\n\
                           U.S. TOTAL,Private,950,1250\n";
        let (_dir, config) = setup(&[("2020.csv", &with_all), ("2021.csv", without_pay)]);

        let obs = load_industry(&config, "retail").unwrap();
        assert_eq!(
            values_for(&obs, Metric::WeeklyWage),
            [(2020, 900.0), (2021, 950.0)]
        );
        // 2021 contributes nothing for pay, but 2020's contribution survives.
        assert_eq!(values_for(&obs, Metric::AnnualPay), [(2020, 46800.0)]);
        assert_eq!(
            values_for(&obs, Metric::EmploymentLevel),
            [(2020, 1200.0), (2021, 1250.0)]
        );
    }

    #[test]
    fn unparseable_year_skips_only_that_file() {
        let contents = format!("{FULL_HEADER}\nU.S. TOTAL,Private,900,46800,1200\n");
        let (_dir, config) = setup(&[("2020.csv", &contents), ("latest.csv", &contents)]);

        let obs = load_industry(&config, "retail").unwrap();
        assert_eq!(obs.len(), 3);
        assert!(obs.iter().all(|o| o.year == 2020));
    }

    #[test]
    fn year_is_token_before_first_dot() {
        assert_eq!(
            year_from_filename(&PathBuf::from("2021.annual.csv")),
            Some(2021)
        );
        assert_eq!(year_from_filename(&PathBuf::from("latest.csv")), None);
        assert_eq!(year_from_filename(&PathBuf::from("2020-q1.csv")), None);
    }

    #[test]
    fn file_missing_filter_columns_is_skipped() {
        let good = format!("{FULL_HEADER}\nU.S. TOTAL,Private,900,46800,1200\n");
        let bad = "own_title,annual_avg_emplvl\nPrivate,77\n";
        let (_dir, config) = setup(&[("2020.csv", &good), ("2021.csv", bad)]);

        let obs = load_industry(&config, "retail").unwrap();
        assert!(obs.iter().all(|o| o.year == 2020));
    }

    #[test]
    fn non_csv_files_are_ignored() {
        let contents = format!("{FULL_HEADER}\nU.S. TOTAL,Private,900,46800,1200\n");
        let (_dir, config) = setup(&[("2020.csv", &contents), ("readme.txt", "hello")]);

        let obs = load_industry(&config, "retail").unwrap();
        assert_eq!(obs.len(), 3);
    }

    #[test]
    fn empty_industry_directory_yields_no_observations() {
        let (_dir, config) = setup(&[]);
        let obs = load_industry(&config, "retail").unwrap();
        assert!(obs.is_empty());
    }

    #[test]
    fn custom_filter_constants_are_honored() {
        let contents = format!(
            "{FULL_HEADER}\n\
             U.S. TOTAL,Private,900,46800,1200\n\
             Vermont,Local Government,700,36000,50\n"
        );
        let (_dir, mut config) = setup(&[("2020.csv", &contents)]);
        config.area_title = "Vermont".to_string();
        config.own_title = "Local Government".to_string();

        let obs = load_industry(&config, "retail").unwrap();
        assert_eq!(values_for(&obs, Metric::EmploymentLevel), [(2020, 50.0)]);
    }
}
