//! Data layer: loading, normalization, filtering, selection and trends.
//!
//! Architecture:
//! ```text
//!  Watchlist .csv (banner row, header row, data rows)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  schema check, parse rows → Table (memoized in TableCache)
//!   └──────────┘
//!        │          normalize: "1,234.5" → Metric::Value, "n/a" → Unparseable
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  FilterCriteria → indices of matching companies
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  select   │  name → first matching Record
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  trend    │  Record → five (label, Metric) points for the chart
//!   └──────────┘
//! ```

pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod select;
pub mod trend;
