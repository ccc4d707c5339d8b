/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  chicago.csv / new_york_city.csv / washington.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows, derive month/weekday/hour → TripTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ TripTable │  Vec<Trip> in load order
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply month/day narrowing → filtered TripTable
///   └──────────┘
/// ```
pub mod filter;
pub mod loader;
pub mod model;
