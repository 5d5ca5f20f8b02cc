/// Data layer: core types, loading, and grouping.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows, parse_numeric per field → IrisDataset
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ IrisDataset  │  Vec<Observation>, species in first-seen order
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  group    │  group_by(label) → per-species groups
///   └──────────┘
/// ```

pub mod error;
pub mod group;
pub mod loader;
pub mod model;
