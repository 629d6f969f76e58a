pub mod config;
pub mod directory;
pub mod error;
pub mod listing;
pub mod telemetry;
pub mod workflows;
