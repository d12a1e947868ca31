use std::collections::BTreeMap;

use palette::{Hsl, IntoColor, Srgb};
use serde::{Deserialize, Serialize};

use crate::data::model::Value;

// ---------------------------------------------------------------------------
// Rgb – renderer-agnostic series colour
// ---------------------------------------------------------------------------

/// 8-bit sRGB colour stored on every series of a figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const GRAY: Rgb = Rgb(160, 160, 160);
    pub const LIGHT_BLUE: Rgb = Rgb(140, 180, 255);
}

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Rgb> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: hue value → Rgb
// ---------------------------------------------------------------------------

/// Maps the distinct values of a hue column to distinct colours, so the same
/// hue value is drawn in the same colour on every sub-plot.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<Value, Rgb>,
    default_color: Rgb,
}

impl ColorMap {
    /// Build a colour map; colours are assigned in the order of `values`.
    pub fn new(values: &[Value]) -> Self {
        let mapping = values
            .iter()
            .cloned()
            .zip(generate_palette(values.len()))
            .collect();

        ColorMap {
            mapping,
            default_color: Rgb::GRAY,
        }
    }

    /// Look up the colour for a given value.
    pub fn color_for(&self, value: &Value) -> Rgb {
        self.mapping
            .get(value)
            .copied()
            .unwrap_or(self.default_color)
    }
}
