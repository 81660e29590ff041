#![doc = include_str!("../README.md")]

mod error;
mod graph;
mod model;
mod path;
mod routing;
pub mod seed;

pub use error::{Error, LocationKey};
pub use graph::TransitGraph;
pub use model::{Cost, LocationId, Metric, Neighbor, Route, RouteId};
pub use path::PathResult;
pub use routing::{PathConfig, ShortestPath, shortest_path_by};
