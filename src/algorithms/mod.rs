//! Benchmarked FST algorithms.

pub mod connect;
pub mod invert;
pub mod rm_final_epsilon;
pub mod topsort;
