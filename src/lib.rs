pub mod app;
pub mod config;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod infra;
pub mod logging;
