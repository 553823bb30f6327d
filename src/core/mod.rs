//! Core-Domänentypen: Handles, Weltgraph, Marker-Store.

pub mod graph;
pub mod handle;
pub mod markers;

pub use graph::NetGraph;
pub use handle::{EdgeHandle, NodeHandle};
pub use markers::{MarkerStore, MarkerTag, MarkerTagSet};
