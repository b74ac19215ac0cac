/// Data layer: core types, loading, and view projection.
///
/// Architecture:
/// ```text
///  Eurostat CSV extract
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows, drop aggregate regions → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Observation>, selection lists
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   view    │  pure projections → ScatterSeries / LineSeries
///   └──────────┘
/// ```
pub mod loader;
pub mod model;
pub mod view;
