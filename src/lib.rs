//! Small, stateless helpers for tabular data:
//!
//! * [`transform::interpolate::linear_interpolation`] fills isolated gaps in a
//!   numeric column with the mean of their neighbours.
//! * [`transform::rolling::rolling_average`] computes a trailing rolling mean
//!   with edge-clamped windows.
//! * [`figure::subplot::subplot_by_category`] builds one stacked line plot per
//!   category value.

pub mod color;
pub mod data;
pub mod error;
pub mod figure;
pub mod transform;

pub use data::model::{Column, Table, Value};
pub use error::TableError;
pub use figure::model::Figure;
pub use figure::style::{FontWeight, PlotStyle, TitleStyle};
pub use figure::subplot::{SubplotSpec, subplot_by_category};
pub use transform::interpolate::{Interpolation, linear_interpolation};
pub use transform::rolling::{rolling_average, rolling_average_column};
