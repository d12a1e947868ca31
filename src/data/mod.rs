/// Data layer: core table types, grouping, and Arrow interop.
///
/// Architecture:
/// ```text
///   Arrow RecordBatch / hand-built columns
///        │
///        ▼
///   ┌──────────┐
///   │  batch    │  RecordBatch → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  Vec<Column>, positional rows
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  distinct values, row groups by column
///   └──────────┘
/// ```

pub mod batch;
pub mod filter;
pub mod model;
