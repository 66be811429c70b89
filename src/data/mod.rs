/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet          http(s) URL
///        │                               │
///        ▼                               ▼
///   ┌──────────┐                    ┌──────────┐
///   │  loader   │◄───────────────────│  fetch    │  GET → CSV text
///   └──────────┘                    └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ StockCatalog  │  Vec<Row>, taxonomy value lists
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  exact (field, value) match → filtered rows
///   └──────────┘
/// ```

pub mod fetch;
pub mod filter;
pub mod loader;
pub mod model;
