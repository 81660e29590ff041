use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use ordered_float::OrderedFloat;
use strum::{Display, EnumIter, EnumString};

/// Identifier of a location registered in the transit graph.
/// Identifiers are assigned sequentially starting from 1 and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocationId(u32);

impl LocationId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Position of the location in the registry storage.
    pub(crate) const fn index(&self) -> Option<usize> {
        match self.0.checked_sub(1) {
            Some(index) => Some(index as usize),
            None => None,
        }
    }

    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index as u32 + 1)
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index of a route record in the route arena of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RouteId(usize);

impl RouteId {
    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(&self) -> usize {
        self.0
    }
}

/// Accumulated weight of a path under a given metric.
/// Costs are never NaN, which makes them totally ordered and usable as priority queue keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cost(OrderedFloat<f64>);

impl Cost {
    pub const ZERO: Self = Self(OrderedFloat(0.0));
    pub const INFINITY: Self = Self(OrderedFloat(f64::INFINITY));

    /// Returns None if the value is NaN or negative.
    pub fn from_value(value: f64) -> Option<Self> {
        if value.is_nan() || value < 0.0 {
            None
        } else {
            Some(Self(OrderedFloat(value)))
        }
    }

    pub const fn value(&self) -> f64 {
        self.0.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.0.is_finite()
    }
}

impl Add for Cost {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Cost {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Cost {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |total, cost| total + cost)
    }
}

/// The weight a path query minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Metric {
    /// Physical length of the routes, in kilometers.
    #[default]
    Distance,
    /// Price of the routes, in rupees.
    Fare,
}

impl Metric {
    /// Unit the metric is expressed in.
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::Distance => "km",
            Self::Fare => "Rs",
        }
    }

    /// Projects the route onto the weight of this metric.
    pub const fn weight(&self, route: &Route) -> f64 {
        match self {
            Self::Distance => route.distance,
            Self::Fare => route.fare,
        }
    }
}

/// Undirected connection between two locations.
/// A single record is shared by the adjacency lists of both endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Route {
    pub from: LocationId,
    pub to: LocationId,
    /// Length of the route in kilometers.
    pub distance: f64,
    /// Price of the route in rupees.
    pub fare: f64,
}

impl Route {
    /// Gets the endpoint opposite to the given one.
    /// For a route that loops onto the same location both endpoints are the same.
    pub fn opposite(&self, location: LocationId) -> LocationId {
        if self.from == location {
            self.to
        } else {
            self.from
        }
    }
}

/// A route as seen from one of its endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub route: RouteId,
    /// The location at the other end of the route.
    pub location: LocationId,
    pub distance: f64,
    pub fare: f64,
}
