pub mod chart;
pub mod classify;
pub mod config;
pub mod errors;
pub mod export;
pub mod graph;
pub mod resolution;
pub mod roster;
pub mod types;
