use strum::IntoEnumIterator;
use tracing::info;

use crate::StarSystem::{AlphaCentauri, Betelgeuse, Sirius, SolarSystem, Vega};
use crate::{RouteGraph, StarSystem, TravelTime};

/// Routes of the known universe with their travel time.
const ROUTES: [(StarSystem, StarSystem, f64); 9] = [
    (SolarSystem, AlphaCentauri, 5.0),
    (AlphaCentauri, Sirius, 4.0),
    (Sirius, Betelgeuse, 8.0),
    (Betelgeuse, Sirius, 8.0),
    (Betelgeuse, Vega, 6.0),
    (SolarSystem, Betelgeuse, 5.0),
    (Sirius, Vega, 2.0),
    (Vega, AlphaCentauri, 3.0),
    (SolarSystem, Vega, 7.0),
];

/// Creates the graph of the known universe: every star system and the nine routes between them.
pub fn create_universe() -> RouteGraph<StarSystem> {
    let mut universe = RouteGraph::with_vertices(StarSystem::iter());

    for (from, to, hours) in ROUTES {
        // every ordered pair appears once in ROUTES, so no edge is ever rejected
        let inserted = universe.add_edge(from, to, TravelTime::from_hours(hours));
        debug_assert!(inserted.is_ok(), "{inserted:?}");
    }

    info!(
        "Created universe with {} star systems and {} routes",
        universe.vertex_count(),
        universe.edge_count()
    );

    universe
}
