// Library root: configuration, event loading, data-file discovery and the
// wOBA metric engine.

pub mod config;
pub mod data_source;
pub mod events;
pub mod metrics;
pub mod name;
