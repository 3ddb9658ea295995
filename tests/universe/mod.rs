use std::sync::LazyLock;

use star_routes::{RouteGraph, StarSystem, create_universe};

pub static UNIVERSE: LazyLock<RouteGraph<StarSystem>> = LazyLock::new(create_universe);
