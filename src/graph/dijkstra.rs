use std::cmp::Ordering;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::Cost;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapElement<LocationId> {
    /// Current best known cost from origin to this location.
    pub cost: Cost,
    /// Insertion order of the element into the frontier.
    pub sequence: u64,
    pub location: LocationId,
}

// The priority queue depends on the implementation of the Ord trait.
// By default std::BinaryHeap is a max heap.
// Explicitly implement the trait so the queue becomes a min heap.
impl<LocationId: Eq> Ord for HeapElement<LocationId> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            // breaking ties by insertion order (first in, first out)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<LocationId: Eq> PartialOrd for HeapElement<LocationId> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Unpacks the shortest path from destination back to origin.
///
/// # Panics
///
/// If the chain of previous locations does not lead back to the origin within `max_len` steps,
/// which can only happen if the search that filled the map is broken.
pub fn unpack_path<LocationId: Copy + Eq + Hash + std::fmt::Debug>(
    previous_map: &FxHashMap<LocationId, LocationId>,
    origin: LocationId,
    destination: LocationId,
    max_len: usize,
) -> Vec<LocationId> {
    let mut locations = vec![destination];
    let mut next = destination;

    while next != origin {
        match previous_map.get(&next) {
            Some(&previous) if locations.len() < max_len => {
                next = previous;
                locations.push(previous);
            }
            _ => unreachable!("broken path {origin:?} -> {destination:?} at {next:?}"),
        }
    }

    locations.reverse();
    locations
}
