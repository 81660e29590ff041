use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::graph::dijkstra::{HeapElement, unpack_path};
use crate::{Cost, Error, LocationId, Metric, PathResult, Route, TransitGraph};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathConfig {
    /// Weight of the routes the path minimizes.
    pub metric: Metric,
    /// Paths whose cost would exceed this value are not explored.
    pub max_cost: Cost,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            metric: Metric::Distance,
            max_cost: Cost::INFINITY,
        }
    }
}

impl PathConfig {
    pub fn with_metric(metric: Metric) -> Self {
        Self {
            metric,
            ..Self::default()
        }
    }
}

/// Lowest cost sequence of locations between an origin and a destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    pub cost: Cost,
    /// Locations from origin to destination (both included).
    pub locations: Vec<LocationId>,
}

/// Computes the lowest cost path between two locations with Dijkstra's algorithm.
///
/// The cost of each route is given by the weight function, which is expected to return finite
/// and non-negative values: routes with a negative or NaN weight are never followed.
/// Returns None if the destination cannot be reached without exceeding the max cost.
pub fn shortest_path_by<W>(
    graph: &TransitGraph,
    origin: LocationId,
    destination: LocationId,
    max_cost: Cost,
    weight: W,
) -> Result<Option<ShortestPath>, Error>
where
    W: Fn(&Route) -> f64,
{
    debug!("Computing shortest path {origin} -> {destination} (max cost {max_cost:?})");

    graph.name_of(origin)?;
    graph.name_of(destination)?;

    // (current) lowest cost from origin to this location
    let mut best_costs = FxHashMap::from_iter([(origin, Cost::ZERO)]);

    // previous location (value) on the current best known path from origin to this location (key)
    let mut previous_map: FxHashMap<LocationId, LocationId> = FxHashMap::default();

    // priority queue of discovered locations that may need to be visited, lowest cost first
    let mut sequence = 0;
    let mut frontier = BinaryHeap::from([HeapElement {
        cost: Cost::ZERO,
        sequence,
        location: origin,
    }]);

    while let Some(element) = frontier.pop() {
        if element.location == destination {
            let locations = unpack_path(
                &previous_map,
                origin,
                destination,
                graph.location_count(),
            );

            return Ok(Some(ShortestPath {
                cost: element.cost,
                locations,
            }));
        }

        // check if we already know a cheaper way to get to this location from the origin
        let best_cost = *best_costs.get(&element.location).unwrap_or(&Cost::INFINITY);
        if element.cost > best_cost {
            continue;
        }

        for route in graph.exiting_routes(element.location)? {
            let Some(route_cost) = Cost::from_value(weight(route)) else {
                continue;
            };

            let cost = element.cost + route_cost;
            if cost > max_cost {
                continue;
            }

            let location_to = route.opposite(element.location);
            let best_cost = *best_costs.get(&location_to).unwrap_or(&Cost::INFINITY);

            // check if we can follow the current path to reach the neighbor in a cheaper way
            if cost < best_cost {
                trace!("Relaxing {location_to} via {}: {cost:?}", element.location);

                sequence += 1;
                best_costs.insert(location_to, cost);
                previous_map.insert(location_to, element.location);
                frontier.push(HeapElement {
                    cost,
                    sequence,
                    location: location_to,
                });
            }
        }
    }

    Ok(None)
}

impl TransitGraph {
    /// Finds the path with the shortest total distance between two locations.
    pub fn shortest_path(&self, start: LocationId, end: LocationId) -> Result<PathResult, Error> {
        self.find_path(&PathConfig::with_metric(Metric::Distance), start, end)
    }

    /// Finds the path with the lowest total fare between two locations.
    pub fn cheapest_path(&self, start: LocationId, end: LocationId) -> Result<PathResult, Error> {
        self.find_path(&PathConfig::with_metric(Metric::Fare), start, end)
    }

    /// Finds the best path between two locations according to the config.
    ///
    /// Fails with [`Error::UnknownLocation`] if any of the locations is not registered and with
    /// [`Error::Unreachable`] if no sequence of routes connects them.
    pub fn find_path(
        &self,
        config: &PathConfig,
        start: LocationId,
        end: LocationId,
    ) -> Result<PathResult, Error> {
        let metric = config.metric;
        debug!("Finding {metric} path {start} -> {end}");

        let path = shortest_path_by(self, start, end, config.max_cost, |route| {
            metric.weight(route)
        })?;

        let Some(ShortestPath { cost, locations }) = path else {
            return Err(Error::Unreachable {
                start: self.name_of(start)?.to_owned(),
                end: self.name_of(end)?.to_owned(),
            });
        };

        let names = locations
            .into_iter()
            .map(|location| self.name_of(location).map(str::to_owned))
            .collect::<Result<_, _>>()?;

        Ok(PathResult {
            metric,
            names,
            total: cost.value(),
        })
    }
}
