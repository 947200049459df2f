pub mod config;
pub mod fixtures;
