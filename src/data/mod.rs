//! Graph preparation before analysis

pub mod preprocessing;
