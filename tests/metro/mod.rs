use std::sync::LazyLock;

use citymetro::{LocationId, TransitGraph, seed};

pub static CITY_METRO: LazyLock<TransitGraph> = LazyLock::new(seed::city_metro);

pub const CITY_MALL: LocationId = LocationId::new(1);
pub const SALON: LocationId = LocationId::new(2);
pub const GROCERY_STORE: LocationId = LocationId::new(3);
pub const RESTAURANTS: LocationId = LocationId::new(4);
pub const CITY_PARK: LocationId = LocationId::new(5);
pub const STADIUM: LocationId = LocationId::new(6);

pub fn names(names: &[&str]) -> Vec<String> {
    names.iter().map(|&name| name.to_owned()).collect()
}
