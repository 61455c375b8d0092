//! Relationship Graph - directed intelligibility edges between languages.
//!
//! The graph consists of:
//! - **Languages**: Nodes, each belonging to one family
//! - **Relationships**: Directed, weighted edges `base -> related`
//!
//! An edge says "knowing `base` helps you understand `related`". Edges are
//! never implicitly symmetric; mutual intelligibility needs two edges.

mod graph;
mod relationship;

pub use graph::*;
pub use relationship::*;
