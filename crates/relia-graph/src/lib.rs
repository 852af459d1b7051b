//! # relia-graph
//!
//! The graph adapter. Holds components and connections in a `petgraph`
//! `StableGraph` between a reserved source and sink, and enumerates simple
//! source-sink paths for the cut-set engine.

pub mod component;
pub mod definition;
pub mod static_paths;
pub mod system_graph;

pub use component::Component;
pub use definition::{ComponentDefinition, ConnectionDefinition, SystemDefinition};
pub use static_paths::StaticPaths;
pub use system_graph::{NodeKind, SystemGraph, SystemNode};
