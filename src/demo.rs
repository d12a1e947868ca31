use anyhow::Result;

use jke_utilities::{Column, Table};

/// Column holding the simulated measurement.
pub const VALUE_COLUMN: &str = "temperature";

const YEARS: [i64; 3] = [2022, 2023, 2024];
const SITES: [&str; 2] = ["north", "south"];
const DAYS: usize = 120;

/// A demo table plus the row positions that were blanked out.
pub struct DemoData {
    pub table: Table,
    pub gaps: Vec<usize>,
}

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
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

/// Daily temperatures per (year, site) block, with a few single-day gaps and
/// the odd two-day gap that interpolation has to leave alone.
pub fn generate(seed: u64) -> Result<DemoData> {
    let mut rng = SimpleRng::new(seed);

    let mut years = Vec::new();
    let mut sites = Vec::new();
    let mut days = Vec::new();
    let mut temps: Vec<Option<f64>> = Vec::new();
    let mut gaps = Vec::new();

    for (yi, &year) in YEARS.iter().enumerate() {
        for (si, &site) in SITES.iter().enumerate() {
            let base = 4.0 + 3.0 * si as f64 + 0.5 * yi as f64;
            let block_start = temps.len();

            for day in 0..DAYS {
                let signal = base + gaussian(day as f64, 60.0, 25.0, 18.0);
                years.push(year);
                sites.push(site);
                days.push(day as f64);
                temps.push(Some(signal + rng.gauss(0.0, 1.2)));
            }

            // keep the first and last day of each block observed
            let mut day = 1;
            while day + 2 < DAYS {
                let roll = rng.next_f64();
                if roll < 0.01 {
                    gaps.extend([block_start + day, block_start + day + 1]);
                    day += 3;
                } else if roll < 0.05 {
                    gaps.push(block_start + day);
                    day += 2;
                } else {
                    day += 1;
                }
            }
        }
    }

    for &row in &gaps {
        temps[row] = None;
    }

    let table = Table::new(vec![
        Column::new("year", years),
        Column::new("site", sites),
        Column::new("day", days),
        Column::new(VALUE_COLUMN, temps),
    ])?;

    log::info!(
        "generated demo table: {} rows, {} flagged gaps",
        table.len(),
        gaps.len()
    );
    Ok(DemoData { table, gaps })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaps_are_blank_and_never_on_block_edges() {
        let demo = generate(42).unwrap();
        assert_eq!(demo.table.len(), YEARS.len() * SITES.len() * DAYS);
        assert!(!demo.gaps.is_empty());
        for &row in &demo.gaps {
            assert!(demo.table.value(row, VALUE_COLUMN).unwrap().is_null());
            let day = row % DAYS;
            assert!(day != 0 && day != DAYS - 1);
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let a = generate(7).unwrap();
        let b = generate(7).unwrap();
        assert_eq!(a.table, b.table);
        assert_eq!(a.gaps, b.gaps);
    }
}
