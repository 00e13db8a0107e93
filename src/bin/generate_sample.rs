//! Writes a synthetic `avocado.csv` in the same layout as the Kaggle
//! "Avocado Prices" export, for running the dashboard without the real data.

use anyhow::{Context, Result};
use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

/// One output row. Field order is column order.
#[derive(Serialize)]
struct SampleRow<'a> {
    // pandas writes an unnamed index column first
    #[serde(rename = "")]
    index: usize,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "AveragePrice")]
    average_price: f64,
    #[serde(rename = "Total Volume")]
    total_volume: f64,
    #[serde(rename = "type")]
    kind: &'a str,
    year: i32,
    region: &'a str,
}

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
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform in `[lo, hi)`.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        lo + (hi - lo) * unit
    }
}

/// Region name and its baseline conventional price.
const REGIONS: &[(&str, f64)] = &[
    ("Albany", 1.25),
    ("Atlanta", 1.05),
    ("Boston", 1.30),
    ("Chicago", 1.15),
    ("Houston", 0.90),
    ("LosAngeles", 1.00),
    ("SanFrancisco", 1.55),
    ("Seattle", 1.40),
];

const WEEKS: i64 = 52 * 3;
const ORGANIC_PREMIUM: f64 = 0.45;

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = SimpleRng::new(42);
    let first_week = NaiveDate::from_ymd_opt(2015, 1, 4).context("invalid start date")?;

    let output_path = "avocado.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let mut index = 0;
    for kind in ["conventional", "organic"] {
        for &(region, base) in REGIONS {
            for week in 0..WEEKS {
                let date = first_week + Duration::weeks(week);
                // yearly seasonality
                let season = (week as f64 / 52.0 * std::f64::consts::TAU).sin() * 0.15;
                let premium = if kind == "organic" { ORGANIC_PREMIUM } else { 0.0 };
                let price = base + premium + season + rng.uniform(-0.08, 0.08);

                writer.serialize(SampleRow {
                    index,
                    date: date.format("%Y-%m-%d").to_string(),
                    average_price: (price * 100.0).round() / 100.0,
                    total_volume: (rng.uniform(20_000.0, 900_000.0) * 100.0).round() / 100.0,
                    kind,
                    year: date.year(),
                    region,
                })?;
                index += 1;
            }
        }
    }
    writer.flush().context("flushing CSV")?;

    log::info!("Wrote {index} rows to {output_path}");
    println!("Wrote {index} rows ({} regions) to {output_path}", REGIONS.len());
    Ok(())
}
