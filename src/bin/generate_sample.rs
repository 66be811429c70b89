use std::sync::Arc;

use arrow::array::{Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

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

    /// Uniform integer in `[lo, hi)`.
    fn uniform(&mut self, lo: i64, hi: i64) -> i64 {
        lo + (self.next_f64() * (hi - lo) as f64) as i64
    }
}

const HEADERS: &[&str] = &[
    "Fecha",
    "Super Familia",
    "Familia",
    "Codigo Producto",
    "Projection",
    "Cono_Stock",
    "Ovillo_Stock",
    "Stock Total",
    "Stock_Flow",
];

const MONTHS: &[&str] = &[
    "2025-01", "2025-02", "2025-03", "2025-04", "2025-05", "2025-06",
];

fn main() {
    let mut rng = SimpleRng::new(42);

    // Super familia → familia → product codes, mirroring the taxonomy
    // the consolidation pipeline walks.
    let taxonomy: &[(&str, &[(&str, &[&str])])] = &[
        (
            "Invierno",
            &[
                ("Lanas", &["L-101", "L-102", "L-103"]),
                ("Polar", &["P-201", "P-202"]),
            ],
        ),
        (
            "Verano",
            &[
                ("Hilos Verano", &["H-301", "H-302"]),
                ("Cintas", &["C-401"]),
            ],
        ),
        ("Bebé", &[("Lanas Bebé", &["B-501", "B-502"])]),
    ];

    // Collect all rows as parallel columns
    let mut all_fecha: Vec<String> = Vec::new();
    let mut all_super: Vec<String> = Vec::new();
    let mut all_family: Vec<String> = Vec::new();
    let mut all_code: Vec<String> = Vec::new();
    let mut all_projection: Vec<i64> = Vec::new();
    let mut all_cono: Vec<i64> = Vec::new();
    let mut all_ovillo: Vec<i64> = Vec::new();
    let mut all_total: Vec<i64> = Vec::new();
    let mut all_flow: Vec<i64> = Vec::new();

    for &(super_family, families) in taxonomy {
        for &(family, codes) in families {
            for &code in codes {
                for &month in MONTHS {
                    let projection = rng.uniform(40, 160);
                    let cono = rng.uniform(0, 120);
                    let ovillo = rng.uniform(0, 80);
                    let total = cono + ovillo;

                    all_fecha.push(month.to_string());
                    all_super.push(super_family.to_string());
                    all_family.push(family.to_string());
                    all_code.push(code.to_string());
                    all_projection.push(projection);
                    all_cono.push(cono);
                    all_ovillo.push(ovillo);
                    all_total.push(total);
                    all_flow.push(total - projection);
                }
            }
        }
    }

    let row_count = all_fecha.len();

    // ---- CSV ----
    let csv_path = "consolidado_datos.csv";
    let mut writer = csv::Writer::from_path(csv_path).expect("Failed to create CSV file");
    writer.write_record(HEADERS).expect("Failed to write header");
    for i in 0..row_count {
        let record = [
            all_fecha[i].clone(),
            all_super[i].clone(),
            all_family[i].clone(),
            all_code[i].clone(),
            all_projection[i].to_string(),
            all_cono[i].to_string(),
            all_ovillo[i].to_string(),
            all_total[i].to_string(),
            all_flow[i].to_string(),
        ];
        writer.write_record(&record).expect("Failed to write CSV row");
    }
    writer.flush().expect("Failed to flush CSV file");

    // ---- Parquet ----
    let schema = Arc::new(Schema::new(vec![
        Field::new("Fecha", DataType::Utf8, false),
        Field::new("Super Familia", DataType::Utf8, false),
        Field::new("Familia", DataType::Utf8, false),
        Field::new("Codigo Producto", DataType::Utf8, false),
        Field::new("Projection", DataType::Int64, false),
        Field::new("Cono_Stock", DataType::Int64, false),
        Field::new("Ovillo_Stock", DataType::Int64, false),
        Field::new("Stock Total", DataType::Int64, false),
        Field::new("Stock_Flow", DataType::Int64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from(
                all_fecha.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from(
                all_super.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from(
                all_family.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from(
                all_code.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
            )),
            Arc::new(Int64Array::from(all_projection)),
            Arc::new(Int64Array::from(all_cono)),
            Arc::new(Int64Array::from(all_ovillo)),
            Arc::new(Int64Array::from(all_total)),
            Arc::new(Int64Array::from(all_flow)),
        ],
    )
    .expect("Failed to create RecordBatch");

    let parquet_path = "consolidado_datos.parquet";
    let file = std::fs::File::create(parquet_path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");

    println!("Wrote {row_count} rows to {csv_path} and {parquet_path}");
}
