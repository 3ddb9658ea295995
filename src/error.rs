use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum GraphError<VertexId> {
    #[error("Edge {0:?} -> {1:?} already exists")]
    DuplicateEdge(VertexId, VertexId),
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum RouteError<VertexId> {
    #[error("No route between {0:?} and {1:?}")]
    NoSuchRoute(VertexId, VertexId),
}
