//! Choropleth shading for the countries map.
//!
//! Reshapes per-country counts into the `country -> {count, fill color}`
//! dataset the mapping collaborator consumes, with fill colors linearly
//! interpolated over the count range.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::CountryCount;
use crate::style::Rgb8;

/// Palette endpoints for the map fill scale.
pub const SHADE_LOW: Rgb8 = Rgb8::new(0xf3, 0xeb, 0xff);
pub const SHADE_HIGH: Rgb8 = Rgb8::new(0xa7, 0x79, 0xe9);

/// Shade entry for one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryShade {
    pub count: u64,
    /// `#rrggbb` fill for the mapping layer.
    pub fill_color: String,
}

/// Map each country to its count and interpolated fill color.
///
/// The lowest count gets [`SHADE_LOW`], the highest [`SHADE_HIGH`]. When all
/// counts are equal (including a single country) the full shade is used, so
/// a lone country never renders as near-white.
pub fn shade_countries(countries: &[CountryCount]) -> BTreeMap<String, CountryShade> {
    if countries.is_empty() {
        return BTreeMap::new();
    }
    let min = countries.iter().map(|c| c.count).min().unwrap_or(0);
    let max = countries.iter().map(|c| c.count).max().unwrap_or(min);
    let span = (max - min) as f64;

    countries
        .iter()
        .map(|c| {
            let t = if span == 0.0 {
                1.0
            } else {
                (c.count - min) as f64 / span
            };
            let shade = CountryShade {
                count: c.count,
                fill_color: SHADE_LOW.lerp(SHADE_HIGH, t).to_hex(),
            };
            (c.name.clone(), shade)
        })
        .collect()
}
