use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{DirectedGraph, TravelTime};

#[derive(Debug, Clone, Copy)]
pub struct ShortestPathConfig {
    /// Paths longer than this are not explored.
    pub max_length: TravelTime,
}

impl Default for ShortestPathConfig {
    fn default() -> Self {
        Self {
            max_length: TravelTime::MAX,
        }
    }
}

/// Sequence of vertices from an origin to a destination, with its total travel time.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<VertexId> {
    pub length: TravelTime,
    pub vertices: Vec<VertexId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapElement<VertexId> {
    /// Current shortest distance from origin to this vertex.
    distance: TravelTime,
    vertex: VertexId,
}

// BinaryHeap pops its greatest element, so the comparison is reversed to pop the closest vertex.
impl<VertexId: Ord> Ord for HeapElement<VertexId> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            // equal distances are ordered by vertex so the pop order never depends on insertion
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl<VertexId: Ord> PartialOrd for HeapElement<VertexId> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Computes the path with the lowest travel time between origin and destination.
/// Edge weights are expected to be non-negative.
/// Returns None if the destination cannot be reached within the configured maximum length.
pub fn shortest_path<G: DirectedGraph>(
    config: &ShortestPathConfig,
    graph: &G,
    origin: G::VertexId,
    destination: G::VertexId,
) -> Option<Path<G::VertexId>> {
    debug!("Computing shortest path {origin:?} -> {destination:?} with {config:?}");

    // (current) shortest distance from origin to this vertex
    let mut shortest_distances = FxHashMap::from_iter([(origin, TravelTime::ZERO)]);

    // previous vertex (value) on the current best known path from origin to this vertex (key)
    let mut previous_map: FxHashMap<G::VertexId, G::VertexId> = FxHashMap::default();

    // priority queue of discovered vertices that may need to be visited
    let mut frontier = BinaryHeap::from([HeapElement {
        vertex: origin,
        distance: TravelTime::ZERO,
    }]);

    while let Some(element) = frontier.pop() {
        if element.vertex == destination {
            // Unpacking: the shortest path from destination back to origin
            let mut vertices = vec![destination];
            let mut next = destination;
            while let Some(&previous) = previous_map.get(&next) {
                next = previous;
                vertices.push(previous);
            }
            vertices.reverse();

            return Some(Path {
                length: element.distance,
                vertices,
            });
        }

        // check if we already know a cheaper way to get to the end of this path from the origin
        let shortest_distance = *shortest_distances
            .get(&element.vertex)
            .unwrap_or(&TravelTime::MAX);
        if element.distance > shortest_distance {
            continue;
        }

        for (vertex_to, weight) in graph.vertex_exiting_edges(element.vertex) {
            let distance = element.distance + weight;
            if distance > config.max_length {
                continue;
            }

            let shortest_distance = *shortest_distances
                .get(&vertex_to)
                .unwrap_or(&TravelTime::MAX);
            // check if we can follow the current path to reach the neighbor in a cheaper way
            if distance < shortest_distance {
                let neighbor = HeapElement {
                    vertex: vertex_to,
                    distance,
                };

                // Relax: we have now found a better way that we are going to explore
                shortest_distances.insert(neighbor.vertex, neighbor.distance);
                previous_map.insert(neighbor.vertex, element.vertex);
                frontier.push(neighbor);
            }
        }
    }

    None
}
