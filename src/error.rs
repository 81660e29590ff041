use std::fmt;

use thiserror::Error;

use crate::{LocationId, Metric};

/// Reference to a location as given by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LocationKey {
    Name(String),
    Id(LocationId),
}

impl fmt::Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{name:?}"),
            Self::Id(id) => write!(f, "#{id}"),
        }
    }
}

impl From<&str> for LocationKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<LocationId> for LocationKey {
    fn from(id: LocationId) -> Self {
        Self::Id(id)
    }
}

#[derive(Error, Debug, PartialEq, Clone)]
pub enum Error {
    #[error("Unknown location {0}")]
    UnknownLocation(LocationKey),
    #[error("Route {metric} is not valid, expected a finite value >= 0: {value}")]
    InvalidWeight { metric: Metric, value: f64 },
    #[error("No path from {start} to {end}")]
    Unreachable { start: String, end: String },
}

impl Error {
    pub(crate) fn unknown_location(key: impl Into<LocationKey>) -> Self {
        Self::UnknownLocation(key.into())
    }
}
