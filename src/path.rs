use std::fmt;

use approx::relative_eq;

use crate::Metric;

/// Best route found between two locations.
#[derive(Debug, Clone)]
pub struct PathResult {
    /// Metric the path minimizes.
    pub metric: Metric,
    /// Names of the locations along the path, from start to end (both included).
    pub names: Vec<String>,
    /// Total weight of the path under its metric.
    pub total: f64,
}

impl PathResult {
    pub fn start(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }

    pub fn end(&self) -> Option<&str> {
        self.names.last().map(String::as_str)
    }

    /// Number of routes travelled along the path.
    pub fn hops(&self) -> usize {
        self.names.len().saturating_sub(1)
    }
}

impl PartialEq for PathResult {
    fn eq(&self, other: &Self) -> bool {
        const EPSILON: f64 = 1e-9;
        self.metric == other.metric
            && self.names == other.names
            && relative_eq!(self.total, other.total, epsilon = EPSILON)
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} {})",
            self.names.join(" -> "),
            self.total,
            self.metric.unit()
        )
    }
}
