//! Writes a demo `industries/` tree of yearly QCEW-shaped CSV snapshots so
//! the dashboard is runnable out of the box:
//! `cargo run --bin generate_sample && cargo run`.

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// One industry's starting levels and nominal yearly growth.
struct IndustryProfile {
    name: &'static str,
    weekly_wage: f64,
    annual_pay: f64,
    employment: f64,
    growth: f64,
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let years = 2015..=2024;
    let profiles = [
        IndustryProfile {
            name: "construction",
            weekly_wage: 1100.0,
            annual_pay: 57000.0,
            employment: 6_800_000.0,
            growth: 0.035,
        },
        IndustryProfile {
            name: "manufacturing",
            weekly_wage: 1250.0,
            annual_pay: 65000.0,
            employment: 12_300_000.0,
            growth: 0.015,
        },
        IndustryProfile {
            name: "retail",
            weekly_wage: 620.0,
            annual_pay: 32000.0,
            employment: 15_600_000.0,
            growth: 0.01,
        },
    ];

    let mut files = 0;
    for profile in &profiles {
        let dir = format!("industries/{}", profile.name);
        std::fs::create_dir_all(&dir).expect("Failed to create industry directory");

        let mut wage = profile.weekly_wage;
        let mut pay = profile.annual_pay;
        let mut employment = profile.employment;

        for year in years.clone() {
            let path = format!("{dir}/{year}.csv");
            let mut writer = csv::Writer::from_path(&path).expect("Failed to create CSV file");

            writer
                .write_record([
                    "area_title",
                    "own_title",
                    "annual_avg_wkly_wage",
                    "avg_annual_pay",
                    "annual_avg_emplvl",
                ])
                .expect("Failed to write header");

            // The national private-sector row the dashboard charts.
            writer
                .write_record([
                    "U.S. TOTAL",
                    "Private",
                    &format!("{wage:.0}"),
                    &format!("{pay:.0}"),
                    &format!("{employment:.0}"),
                ])
                .expect("Failed to write row");

            // Rows the filter must drop: other areas and ownership classes.
            writer
                .write_record([
                    "California",
                    "Private",
                    &format!("{:.0}", wage * 1.2),
                    &format!("{:.0}", pay * 1.2),
                    &format!("{:.0}", employment * 0.12),
                ])
                .expect("Failed to write row");
            writer
                .write_record([
                    "U.S. TOTAL",
                    "Federal Government",
                    &format!("{:.0}", wage * 1.1),
                    &format!("{:.0}", pay * 1.1),
                    &format!("{:.0}", employment * 0.02),
                ])
                .expect("Failed to write row");

            writer.flush().expect("Failed to flush CSV");
            files += 1;

            // Random-walk next year's levels around the nominal growth rate.
            let g = rng.gauss(profile.growth, 0.01);
            wage *= 1.0 + g;
            pay *= 1.0 + rng.gauss(profile.growth, 0.01);
            employment *= 1.0 + rng.gauss(profile.growth * 0.5, 0.02);
        }
    }

    println!(
        "Wrote {files} yearly snapshots for {} industries under industries/",
        profiles.len()
    );
}
