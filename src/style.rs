//! Styling descriptors shared by the segmenter, the choropleth shader, and
//! the renderer.
//!
//! A [`SeriesStyle`] only carries presentation data (label, stroke color,
//! fill opacity); it never influences how a series is split.

use serde::{Deserialize, Serialize};

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` form, as consumed by the mapping collaborator.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear interpolation towards `other`; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgb8, t: f64) -> Rgb8 {
        let t = t.clamp(0.0, 1.0);
        let ch = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb8::new(ch(self.r, other.r), ch(self.g, other.g), ch(self.b, other.b))
    }
}

/// Stroke pattern for a rendered dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineDash {
    Solid,
    /// Dash/gap pattern 5/10, matching the dashboard's forecast styling.
    Dashed,
}

/// Label and color descriptor for one logical series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub label: String,
    pub color: Rgb8,
    /// Opacity of the area fill under the line, 0..1.
    pub fill_opacity: f64,
    pub stroke_width: u32,
}

impl SeriesStyle {
    pub fn new(label: &str, color: Rgb8) -> Self {
        Self {
            label: label.to_string(),
            color,
            fill_opacity: 0.2,
            stroke_width: 3,
        }
    }

    /// Primary series style: indigo, as on the dashboard.
    pub fn visitors() -> Self {
        Self::new("Visitors", Rgb8::new(101, 116, 205))
    }

    /// Comparison series style: red.
    pub fn conversions() -> Self {
        Self::new("Conversions", Rgb8::new(255, 68, 87))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_and_lerp() {
        let low = Rgb8::new(0xf3, 0xeb, 0xff);
        let high = Rgb8::new(0xa7, 0x79, 0xe9);
        assert_eq!(low.to_hex(), "#f3ebff");
        assert_eq!(low.lerp(high, 0.0), low);
        assert_eq!(low.lerp(high, 1.0), high);
        assert_eq!(low.lerp(high, 2.0), high); // clamped
    }
}
