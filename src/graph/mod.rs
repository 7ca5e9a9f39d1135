//! Graph representation and algorithms module

pub mod attributes;
pub mod attributed;
pub mod algorithms;

pub use attributed::{Edge, Graph, NodeId};
pub use attributes::{sanitize_weight, Attributes};
