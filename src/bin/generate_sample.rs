//! Writes a synthetic watchlist export in the dashboard's input layout:
//! a banner row, the header row, then one row per company.
//!
//! Usage: `cargo run --bin generate_sample [output.csv]`

use anyhow::{Context, Result};

/// Small deterministic PRNG (splitmix64), enough for reproducible fixtures.
struct SimpleRng(u64);

impl SimpleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// Format like the screener export: two decimals, thousands separators.
fn with_commas(value: f64) -> String {
    let text = format!("{:.2}", value.abs());
    let (int, frac) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let mut grouped = String::new();
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{frac}")
}

const INDUSTRIES: [&str; 6] = [
    "Banks",
    "IT - Software",
    "Pharmaceuticals",
    "Auto Ancillaries",
    "Chemicals",
    "FMCG",
];

const HEADER: [&str; 10] = [
    "Name",
    "Industry",
    "Current Price",
    "PE",
    "RoE %",
    "Return over 1year",
    "Return over 3years",
    "Return over 5years",
    "Return over 7years",
    "Return over 10years",
];

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Watchlist - SC - Yearly.csv".to_string());
    let mut rng = SimpleRng(42);

    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;

    writer.write_record(["Watchlist - SC - Yearly", "generated sample"])?;
    writer.write_record(HEADER)?;

    let n_companies = 60;
    for i in 0..n_companies {
        let industry = INDUSTRIES[i % INDUSTRIES.len()];
        let name = format!("Company {:02}", i + 1);
        let price = rng.range(20.0, 12_000.0);
        let pe = rng.range(4.0, 110.0);
        let roe = rng.range(-5.0, 45.0);

        // Some cells come out malformed, as in real exports.
        let pe_cell = if rng.chance(0.05) { String::new() } else { with_commas(pe) };
        let roe_cell = if rng.chance(0.05) { "n/a".to_string() } else { format!("{roe:.2}") };

        let mut row = vec![name, industry.to_string(), with_commas(price), pe_cell, roe_cell];
        let mut drift = rng.range(-10.0, 30.0);
        for _ in 0..5 {
            drift += rng.range(-6.0, 6.0);
            row.push(if rng.chance(0.08) { String::new() } else { format!("{drift:.2}") });
        }
        writer.write_record(&row)?;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {n_companies} companies to {output_path}");
    Ok(())
}
