use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use spacex_dash::data::model::{
    COL_BOOSTER_CATEGORY, COL_CLASS, COL_FLIGHT_NUMBER, COL_LAUNCH_SITE, COL_PAYLOAD_MASS,
};

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

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Booster generations in flight order: (category, last flight, success rate, max payload).
const ERAS: [(&str, i64, f64, f64); 5] = [
    ("v1.0", 5, 0.0, 700.0),
    ("v1.1", 20, 0.3, 4500.0),
    ("FT", 40, 0.7, 9600.0),
    ("B4", 48, 0.6, 6500.0),
    ("B5", 56, 0.9, 9600.0),
];

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];

struct Launch {
    flight: i64,
    site: String,
    class: i64,
    payload: f64,
    booster: String,
}

fn generate(rng: &mut SimpleRng) -> Vec<Launch> {
    let mut launches = Vec::new();
    let mut flight = 1;
    for &(booster, last, success_rate, max_payload) in &ERAS {
        while flight <= last {
            // Early flights only flew from LC-40.
            let site = if flight <= 5 {
                SITES[0]
            } else {
                rng.pick(&SITES)
            };
            let payload = (rng.next_f64() * max_payload).round();
            let class = i64::from(rng.next_f64() < success_rate);
            launches.push(Launch {
                flight,
                site: site.to_string(),
                class,
                payload,
                booster: booster.to_string(),
            });
            flight += 1;
        }
    }
    launches
}

fn write_csv(path: &str, launches: &[Launch]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV")?;
    writer.write_record([
        COL_FLIGHT_NUMBER,
        COL_LAUNCH_SITE,
        COL_CLASS,
        COL_PAYLOAD_MASS,
        COL_BOOSTER_CATEGORY,
    ])?;
    for l in launches {
        writer.write_record([
            l.flight.to_string(),
            l.site.clone(),
            l.class.to_string(),
            format!("{:.1}", l.payload),
            l.booster.clone(),
        ])?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn write_parquet(path: &str, launches: &[Launch]) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new(COL_FLIGHT_NUMBER, DataType::Int64, false),
        Field::new(COL_LAUNCH_SITE, DataType::Utf8, false),
        Field::new(COL_CLASS, DataType::Int64, false),
        Field::new(COL_PAYLOAD_MASS, DataType::Float64, false),
        Field::new(COL_BOOSTER_CATEGORY, DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from_iter_values(launches.iter().map(|l| l.flight))),
            Arc::new(StringArray::from_iter_values(launches.iter().map(|l| &l.site))),
            Arc::new(Int64Array::from_iter_values(launches.iter().map(|l| l.class))),
            Arc::new(Float64Array::from_iter_values(launches.iter().map(|l| l.payload))),
            Arc::new(StringArray::from_iter_values(launches.iter().map(|l| &l.booster))),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating writer")?;
    writer.write(&batch).context("writing batch")?;
    writer.close().context("closing writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let launches = generate(&mut rng);

    let csv_path = "spacex_launch_dash.csv";
    let parquet_path = "spacex_launch_dash.parquet";
    write_csv(csv_path, &launches)?;
    write_parquet(parquet_path, &launches)?;

    println!(
        "Wrote {} launches to {csv_path} and {parquet_path}",
        launches.len()
    );
    Ok(())
}
