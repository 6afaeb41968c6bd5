use dashstats::map::{SHADE_HIGH, SHADE_LOW, shade_countries};
use dashstats::models::CountryCount;

fn cc(name: &str, count: u64) -> CountryCount {
    CountryCount {
        name: name.into(),
        count,
    }
}

#[test]
fn palette_endpoints_hit_min_and_max() {
    let shades = shade_countries(&[cc("USA", 100), cc("DEU", 10), cc("FRA", 55)]);
    assert_eq!(shades.len(), 3);
    assert_eq!(shades["DEU"].fill_color, SHADE_LOW.to_hex());
    assert_eq!(shades["USA"].fill_color, SHADE_HIGH.to_hex());
    assert_eq!(shades["DEU"].count, 10);
    // The midpoint lands strictly between the endpoints.
    let mid = &shades["FRA"].fill_color;
    assert_ne!(mid, &SHADE_LOW.to_hex());
    assert_ne!(mid, &SHADE_HIGH.to_hex());
}

#[test]
fn equal_counts_use_the_full_shade() {
    let shades = shade_countries(&[cc("USA", 7), cc("DEU", 7)]);
    assert_eq!(shades["USA"].fill_color, SHADE_HIGH.to_hex());
    assert_eq!(shades["DEU"].fill_color, SHADE_HIGH.to_hex());
}

#[test]
fn single_country_is_fully_shaded() {
    let shades = shade_countries(&[cc("GBR", 3)]);
    assert_eq!(shades["GBR"].fill_color, SHADE_HIGH.to_hex());
}

#[test]
fn empty_input_yields_empty_map() {
    assert!(shade_countries(&[]).is_empty());
}
