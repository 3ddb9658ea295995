//! Travel time of explicit routes and enumeration of all the routes starting from a star system.
//!
//! A route is a walk through the graph: an ordered sequence of vertices where every vertex,
//! including the first one, may appear more than once.

pub mod predicates;

use tracing::{debug, trace};

use crate::{DirectedGraph, RouteError, TravelTime};

/// Returns the total travel time of the route, that is the sum of the weights of the edges
/// between each pair of adjacent vertices. Routes with less than two vertices have no travel time.
///
/// Fails on the first pair of adjacent vertices that is not connected by an edge, without looking
/// at the rest of the route.
pub fn route_distance<G: DirectedGraph>(
    graph: &G,
    route: &[G::VertexId],
) -> Result<TravelTime, RouteError<G::VertexId>> {
    route
        .windows(2)
        .map(|window| {
            let [from, to] = [window[0], window[1]];
            graph.get_edge_weight(from, to).ok_or_else(|| {
                debug!("No route between {from:?} and {to:?} in {route:?}");
                RouteError::NoSuchRoute(from, to)
            })
        })
        .sum()
}

/// Enumerates all the routes that start at the given vertex, keeping the ones accepted by the
/// filter predicate.
///
/// Routes are extended depth-first one edge at a time, following the outgoing edges of the last
/// vertex in the graph order. Every route with at least two vertices that is reached is a
/// candidate. An extended route for which the stop predicate holds is discarded and not explored
/// any further, therefore the stop predicate is the only bound of the search: on a graph with
/// cycles it must eventually hold for every branch, otherwise the enumeration never terminates.
///
/// Routes are returned in depth-first pre-order.
pub fn all_routes<G, S, F>(
    graph: &G,
    start: G::VertexId,
    stop_predicate: S,
    filter_predicate: F,
) -> Vec<Vec<G::VertexId>>
where
    G: DirectedGraph,
    S: Fn(&[G::VertexId]) -> bool,
    F: Fn(&[G::VertexId]) -> bool,
{
    debug!("Computing all routes from {start:?}");

    let mut candidates = vec![];

    // partial routes that still need to be extended, the next one to explore on top
    let mut frontier = vec![vec![start]];

    while let Some(route) = frontier.pop() {
        let Some(&last) = route.last() else {
            continue;
        };

        let mut extensions: Vec<_> = graph
            .vertex_exiting_edges(last)
            .map(|(vertex, _)| {
                let mut extended = Vec::with_capacity(route.len() + 1);
                extended.extend_from_slice(&route);
                extended.push(vertex);
                extended
            })
            .filter(|extended| {
                let stop = stop_predicate(extended);
                if stop {
                    trace!("Stop extending {extended:?}");
                }
                !stop
            })
            .collect();

        // the first extension is explored first
        extensions.reverse();
        frontier.append(&mut extensions);

        if route.len() > 1 {
            candidates.push(route);
        }
    }

    debug!("Found {} candidate routes from {start:?}", candidates.len());

    candidates.retain(|route| filter_predicate(route));
    candidates
}
