//! The City Metro reference network.

use tracing::warn;

use crate::TransitGraph;

/// Locations of the reference network, in registration (ID) order.
pub const LOCATIONS: [&str; 6] = [
    "City Mall",
    "Salon",
    "Grocery Store",
    "Restaurants",
    "City Park",
    "Stadium",
];

/// Routes of the reference network: `(from, to, distance in km, fare in Rs)`.
pub const ROUTES: [(&str, &str, f64, f64); 7] = [
    ("City Mall", "Salon", 1.0, 0.5),
    ("City Mall", "Grocery Store", 2.0, 1.0),
    ("City Mall", "Restaurants", 3.0, 1.5),
    ("City Mall", "City Park", 4.0, 2.0),
    ("Salon", "City Park", 1.5, 1.0),
    ("Grocery Store", "Stadium", 2.5, 1.5),
    ("Restaurants", "Stadium", 3.5, 2.0),
];

/// Builds the transit graph of the City Metro reference deployment.
pub fn city_metro() -> TransitGraph {
    let mut graph = TransitGraph::new();

    for name in LOCATIONS {
        graph.add_location(name);
    }

    for (from, to, distance, fare) in ROUTES {
        if let Err(error) = graph.add_route(from, to, distance, fare) {
            warn!("Skipping seed route {from:?} -> {to:?}: {error}");
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::LocationId;

    #[test]
    fn city_metro_network() {
        let graph = city_metro();

        assert_eq!(graph.location_count(), 6);
        assert_eq!(graph.route_count(), 7);
        assert_eq!(graph.id_of("City Mall"), Ok(LocationId::new(1)));
        assert_eq!(graph.id_of("Stadium"), Ok(LocationId::new(6)));

        let city_mall_degree = graph.neighbors(LocationId::new(1)).unwrap().count();
        assert_eq!(city_mall_degree, 4);
    }
}
