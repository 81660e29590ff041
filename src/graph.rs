use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::{Error, LocationId, Metric, Neighbor, Route, RouteId};

/// Undirected weighted multigraph of the transit network.
///
/// The graph owns three things:
/// - the location registry, mapping names to sequential identifiers and back,
/// - the route arena, where every route is stored once,
/// - the adjacency lists, referencing the arena from both endpoints of each route.
///
/// Locations and routes can only be added, never removed.
#[derive(Debug, Clone, Default)]
pub struct TransitGraph {
    /// Location names, the location with ID `n` is stored at index `n - 1`.
    names: Vec<String>,
    ids: FxHashMap<String, LocationId>,
    routes: Vec<Route>,
    /// Routes touching each location, indexed like `names`.
    adjacency: Vec<Vec<RouteId>>,
}

impl TransitGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a location and returns its ID.
    /// If the name is already registered its existing ID is returned and the graph is unchanged.
    pub fn add_location(&mut self, name: &str) -> LocationId {
        if let Some(&id) = self.ids.get(name) {
            trace!("Location {name:?} already registered as {id}");
            return id;
        }

        let id = LocationId::from_index(self.names.len());
        debug!("Registering location {name:?} as {id}");

        self.names.push(name.to_owned());
        self.ids.insert(name.to_owned(), id);
        self.adjacency.push(vec![]);
        id
    }

    /// Registers a location together with its routes to already known neighbors.
    /// Nothing is added to the graph unless every neighbor and weight is valid.
    pub fn add_location_with_routes<'a, I>(
        &mut self,
        name: &str,
        routes: I,
    ) -> Result<LocationId, Error>
    where
        I: IntoIterator<Item = (&'a str, f64, f64)>,
    {
        let routes: Vec<_> = routes.into_iter().collect();

        for &(neighbor, distance, fare) in &routes {
            validate_weights(distance, fare)?;
            if neighbor != name && !self.contains_location(neighbor) {
                return Err(Error::unknown_location(neighbor));
            }
        }

        let id = self.add_location(name);
        for (neighbor, distance, fare) in routes {
            self.add_route(name, neighbor, distance, fare)?;
        }

        Ok(id)
    }

    /// Connects two registered locations with a bidirectional route.
    ///
    /// Both weights must be finite and non-negative. On error the graph is left unmodified.
    pub fn add_route(
        &mut self,
        from: &str,
        to: &str,
        distance: f64,
        fare: f64,
    ) -> Result<RouteId, Error> {
        validate_weights(distance, fare)?;
        let from_id = self.id_of(from)?;
        let to_id = self.id_of(to)?;

        let route = RouteId::from_index(self.routes.len());
        debug!("Adding {route:?} {from:?} <-> {to:?} ({distance} km, {fare} Rs)");

        self.routes.push(Route {
            from: from_id,
            to: to_id,
            distance,
            fare,
        });

        self.adjacent_routes_mut(from_id).push(route);
        if from_id != to_id {
            self.adjacent_routes_mut(to_id).push(route);
        }

        Ok(route)
    }

    pub fn id_of(&self, name: &str) -> Result<LocationId, Error> {
        self.ids
            .get(name)
            .copied()
            .ok_or_else(|| Error::unknown_location(name))
    }

    pub fn name_of(&self, id: LocationId) -> Result<&str, Error> {
        id.index()
            .and_then(|index| self.names.get(index))
            .map(String::as_str)
            .ok_or_else(|| Error::unknown_location(id))
    }

    pub fn contains_location(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    /// Gets all the registered locations, sorted by ID.
    pub fn list_locations(&self) -> Vec<(LocationId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(index, name)| (LocationId::from_index(index), name.as_str()))
            .collect()
    }

    pub fn location_count(&self) -> usize {
        self.names.len()
    }

    pub fn route(&self, route: RouteId) -> Option<&Route> {
        self.routes.get(route.index())
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Gets an iterator over the routes of the location.
    /// For each route returns the location at its other end and both its weights.
    pub fn neighbors(
        &self,
        location: LocationId,
    ) -> Result<impl Iterator<Item = Neighbor> + '_, Error> {
        Ok(self.adjacent_routes(location)?.iter().map(move |&route| {
            let Route { distance, fare, .. } = self.routes[route.index()];
            Neighbor {
                route,
                location: self.routes[route.index()].opposite(location),
                distance,
                fare,
            }
        }))
    }

    /// Gets an iterator over the routes of the location, as arena records.
    pub(crate) fn exiting_routes(
        &self,
        location: LocationId,
    ) -> Result<impl Iterator<Item = &Route> + '_, Error> {
        Ok(self
            .adjacent_routes(location)?
            .iter()
            .map(|route| &self.routes[route.index()]))
    }

    fn adjacent_routes(&self, location: LocationId) -> Result<&[RouteId], Error> {
        location
            .index()
            .and_then(|index| self.adjacency.get(index))
            .map(Vec::as_slice)
            .ok_or_else(|| Error::unknown_location(location))
    }

    fn adjacent_routes_mut(&mut self, location: LocationId) -> &mut Vec<RouteId> {
        // IDs handed out by the registry always have an adjacency list
        let index = location.index().unwrap_or_default();
        &mut self.adjacency[index]
    }
}

fn validate_weights(distance: f64, fare: f64) -> Result<(), Error> {
    for (metric, value) in [(Metric::Distance, distance), (Metric::Fare, fare)] {
        if !value.is_finite() || value < 0.0 {
            return Err(Error::InvalidWeight { metric, value });
        }
    }
    Ok(())
}

pub mod dijkstra;
