mod metro;

use approx::assert_relative_eq;
use citymetro::{Error, Metric, PathResult, TransitGraph};
use test_log::test;

use crate::metro::{
    CITY_MALL, CITY_METRO, CITY_PARK, GROCERY_STORE, RESTAURANTS, SALON, STADIUM, names,
};

#[test]
fn routing_shortest_path_001() {
    let graph: &TransitGraph = &CITY_METRO;

    assert_eq!(
        graph.shortest_path(CITY_MALL, STADIUM).unwrap(),
        PathResult {
            metric: Metric::Distance,
            names: names(&["City Mall", "Grocery Store", "Stadium"]),
            total: 4.5,
        }
    );
}

#[test]
fn routing_cheapest_path_001() {
    let graph: &TransitGraph = &CITY_METRO;

    assert_eq!(
        graph.cheapest_path(CITY_MALL, STADIUM).unwrap(),
        PathResult {
            metric: Metric::Fare,
            names: names(&["City Mall", "Grocery Store", "Stadium"]),
            total: 2.5,
        }
    );
}

#[test]
fn routing_shortest_path_002() {
    let graph: &TransitGraph = &CITY_METRO;

    // 1.0 + 1.5 through the Salon beats the direct 4.0 route
    let path = graph.shortest_path(CITY_MALL, CITY_PARK).unwrap();
    assert_eq!(path.names, names(&["City Mall", "Salon", "City Park"]));
    assert_relative_eq!(path.total, 2.5);
}

#[test]
fn routing_shortest_path_003() {
    let graph: &TransitGraph = &CITY_METRO;

    let path = graph.shortest_path(CITY_PARK, RESTAURANTS).unwrap();
    assert_eq!(
        path.names,
        names(&["City Park", "Salon", "City Mall", "Restaurants"])
    );
    assert_relative_eq!(path.total, 5.5);
    assert_eq!(
        path.to_string(),
        "City Park -> Salon -> City Mall -> Restaurants (5.5 km)"
    );
}

#[test]
fn routing_shortest_path_is_symmetric() {
    let graph: &TransitGraph = &CITY_METRO;

    let forward = graph.shortest_path(SALON, STADIUM).unwrap();
    let backward = graph.shortest_path(STADIUM, SALON).unwrap();

    let mut reversed = backward.names.clone();
    reversed.reverse();
    assert_eq!(forward.names, reversed);
    assert_relative_eq!(forward.total, backward.total);
}

#[test]
fn routing_zero_cost_path() {
    let graph: &TransitGraph = &CITY_METRO;

    for (id, name) in graph.list_locations() {
        for path in [
            graph.shortest_path(id, id).unwrap(),
            graph.cheapest_path(id, id).unwrap(),
        ] {
            assert_eq!(path.names, [name]);
            assert_eq!(path.total, 0.0);
        }
    }
}

#[test]
fn routing_unknown_location() {
    let graph: &TransitGraph = &CITY_METRO;
    let ghost = citymetro::LocationId::new(42);

    assert_eq!(
        graph.shortest_path(CITY_MALL, ghost),
        Err(Error::UnknownLocation(ghost.into()))
    );
    assert_eq!(
        graph.cheapest_path(ghost, CITY_MALL),
        Err(Error::UnknownLocation(ghost.into()))
    );
}

#[test]
fn routing_unreachable() {
    let mut graph = citymetro::seed::city_metro();
    let island = graph.add_location("Island");

    for result in [
        graph.shortest_path(GROCERY_STORE, island),
        graph.cheapest_path(island, GROCERY_STORE),
    ] {
        assert!(matches!(result, Err(Error::Unreachable { .. })));
    }

    assert_eq!(
        graph.shortest_path(GROCERY_STORE, island),
        Err(Error::Unreachable {
            start: "Grocery Store".into(),
            end: "Island".into()
        })
    );
    assert_eq!(
        graph
            .shortest_path(GROCERY_STORE, island)
            .unwrap_err()
            .to_string(),
        "No path from Grocery Store to Island"
    );
}

#[test]
fn routing_metric_independence() {
    // the short way is expensive, the cheap way is long
    let mut graph = TransitGraph::new();
    let home = graph.add_location("Home");
    graph.add_location("Bridge");
    graph.add_location("Ferry");
    let work = graph.add_location("Work");

    graph.add_route("Home", "Bridge", 1.0, 10.0).unwrap();
    graph.add_route("Bridge", "Work", 1.0, 10.0).unwrap();
    graph.add_route("Home", "Ferry", 5.0, 1.0).unwrap();
    graph.add_route("Ferry", "Work", 5.0, 1.0).unwrap();

    let shortest = graph.shortest_path(home, work).unwrap();
    assert_eq!(shortest.names, names(&["Home", "Bridge", "Work"]));
    assert_relative_eq!(shortest.total, 2.0);

    let cheapest = graph.cheapest_path(home, work).unwrap();
    assert_eq!(cheapest.names, names(&["Home", "Ferry", "Work"]));
    assert_relative_eq!(cheapest.total, 2.0);
    assert_eq!(cheapest.to_string(), "Home -> Ferry -> Work (2 Rs)");
}

#[test]
fn routing_parallel_routes() {
    let mut graph = TransitGraph::new();
    let a = graph.add_location("A");
    let b = graph.add_location("B");

    graph.add_route("A", "B", 3.0, 1.0).unwrap();
    graph.add_route("B", "A", 1.0, 3.0).unwrap();

    assert_relative_eq!(graph.shortest_path(a, b).unwrap().total, 1.0);
    assert_relative_eq!(graph.cheapest_path(a, b).unwrap().total, 1.0);
    assert_eq!(graph.shortest_path(a, b).unwrap().names, names(&["A", "B"]));
}

#[test]
fn routing_identifier_order_differs_from_cost_order() {
    // an identifier-ordered frontier would settle "Far" (id 2) through the direct route first
    let mut graph = TransitGraph::new();
    let start = graph.add_location("Start");
    let far = graph.add_location("Far");
    graph.add_location("Hop 1");
    graph.add_location("Hop 2");
    let end = graph.add_location("End");

    graph.add_route("Start", "Far", 10.0, 10.0).unwrap();
    graph.add_route("Start", "Hop 2", 1.0, 1.0).unwrap();
    graph.add_route("Hop 2", "Hop 1", 1.0, 1.0).unwrap();
    graph.add_route("Hop 1", "Far", 1.0, 1.0).unwrap();
    graph.add_route("Far", "End", 1.0, 1.0).unwrap();

    let path = graph.shortest_path(start, end).unwrap();
    assert_eq!(
        path.names,
        names(&["Start", "Hop 2", "Hop 1", "Far", "End"])
    );
    assert_relative_eq!(path.total, 4.0);

    let path = graph.shortest_path(start, far).unwrap();
    assert_relative_eq!(path.total, 3.0);
}
