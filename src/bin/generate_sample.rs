use std::ops::RangeInclusive;

const YEARS: RangeInclusive<i32> = 2008..=2019;

/// (name, economy size factor, per-capita wealth factor)
const COUNTRIES: [(&str, f64, f64); 12] = [
    ("Belgium", 1.0, 1.05),
    ("Bulgaria", 0.12, 0.25),
    ("Czechia", 0.42, 0.55),
    ("Denmark", 0.65, 1.35),
    ("Germany", 6.8, 1.1),
    ("Ireland", 0.6, 1.5),
    ("Spain", 2.4, 0.75),
    ("France", 4.6, 1.0),
    ("Italy", 3.6, 0.85),
    ("Netherlands", 1.6, 1.2),
    ("Austria", 0.8, 1.15),
    ("Sweden", 1.0, 1.25),
];

/// Aggregate groupings the loader is expected to drop.
const AGGREGATES: [(&str, f64, f64); 6] = [
    ("European Union (current composition)", 32.0, 0.9),
    ("European Union (without United Kingdom)", 27.0, 0.88),
    ("European Union (15 countries)", 28.0, 1.0),
    (
        "Euro area (EA11-2000, EA12-2006, EA13-2007, EA15-2008, EA16-2010, \
         EA17-2013, EA18-2014, EA19)",
        23.0,
        0.95,
    ),
    ("Euro area (19 countries)", 23.0, 0.95),
    ("Euro area (12 countries)", 21.0, 1.0),
];

/// (NA_ITEM, share of GDP)
const ITEMS: [(&str, f64); 4] = [
    ("Gross domestic product at market prices", 1.0),
    ("Final consumption expenditure", 0.52),
    ("Gross fixed capital formation", 0.21),
    ("Exports of goods and services", 0.45),
];

/// (UNIT, base value at factor 1.0)
const UNITS: [(&str, f64); 2] = [
    ("Current prices, million euro", 420_000.0),
    ("Euro per capita", 36_000.0),
];

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
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let output_path = "eurostat_sample.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record(["TIME", "GEO", "UNIT", "NA_ITEM", "Value"])
        .expect("Failed to write header");

    let mut rows = 0usize;
    for &(geo, size, wealth) in COUNTRIES.iter().chain(AGGREGATES.iter()) {
        for &(item, item_share) in &ITEMS {
            for &(unit, base) in &UNITS {
                // Each (country, indicator, unit) series gets its own
                // steady growth rate plus yearly noise.
                let growth = 0.01 + rng.next_f64() * 0.03;
                let factor = if unit == "Euro per capita" { wealth } else { size };

                for year in YEARS {
                    let trend =
                        base * factor * item_share * (1.0 + growth).powi(year - 2008);
                    let noise = 1.0 + (rng.next_f64() - 0.5) * 0.04;
                    // Sprinkle in the ":" missing-value sentinel.
                    let value = if rng.next_f64() < 0.02 {
                        ":".to_string()
                    } else {
                        format!("{:.1}", trend * noise)
                    };

                    let year_field = year.to_string();
                    writer
                        .write_record([year_field.as_str(), geo, unit, item, value.as_str()])
                        .expect("Failed to write row");
                    rows += 1;
                }
            }
        }
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {rows} observations to {output_path}");
}
