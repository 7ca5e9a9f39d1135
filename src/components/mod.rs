//! Weak connected components

pub mod detection;

pub use detection::{get_connected_components, largest_component};
