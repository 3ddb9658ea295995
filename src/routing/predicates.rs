//! Ready-made stop and filter predicates for [`all_routes`](crate::all_routes).

use crate::{DirectedGraph, TravelTime, route_distance};

/// Holds once the route has more than `stops` vertices, bounding the route length.
pub fn max_stops<V>(stops: usize) -> impl Fn(&[V]) -> bool {
    move |route| route.len() > stops
}

/// Accepts routes made of exactly `stops` vertices.
pub fn has_stops<V>(stops: usize) -> impl Fn(&[V]) -> bool {
    move |route| route.len() == stops
}

/// Accepts routes whose last vertex is the given one.
pub fn ends_at<V: PartialEq>(vertex: V) -> impl Fn(&[V]) -> bool {
    move |route| route.last() == Some(&vertex)
}

/// Accepts routes that visit the given vertex at least once.
pub fn visits<V: PartialEq>(vertex: V) -> impl Fn(&[V]) -> bool {
    move |route| route.contains(&vertex)
}

/// Holds once the travel time of the route reaches the given threshold.
/// Also holds for routes that cannot be travelled in the graph.
pub fn exceeds_travel_time<G: DirectedGraph>(
    graph: &G,
    threshold: TravelTime,
) -> impl Fn(&[G::VertexId]) -> bool {
    move |route| route_distance(graph, route).map_or(true, |distance| distance >= threshold)
}

/// Holds only if both predicates hold.
pub fn both<V>(
    first: impl Fn(&[V]) -> bool,
    second: impl Fn(&[V]) -> bool,
) -> impl Fn(&[V]) -> bool {
    move |route| first(route) && second(route)
}
