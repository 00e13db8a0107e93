/// Data layer: row types, loading, and region filtering.
///
/// Architecture:
/// ```text
///     avocado.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<AvocadoRow>, regions in first-seen order
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  region == selection → matching rows
///   └──────────┘
/// ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
