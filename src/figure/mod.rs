/// Figure layer: stacked per-category line plots.
///
/// ```text
///   Table ──► subplot_by_category(SubplotSpec, PlotStyle) ──► Figure
///                                                              │
///                                   ┌──────────────────────────┤
///                                   ▼                          ▼
///                          ui::plot (egui_plot)         Figure::to_json
/// ```
///
/// The figure is plain data; rendering and export belong to the caller.

pub mod model;
pub mod style;
pub mod subplot;
