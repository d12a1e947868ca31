//! Column transforms: single-gap interpolation and trailing rolling means.
//!
//! Both are pure: they borrow their input and return fresh data.

pub mod interpolate;
pub mod rolling;
