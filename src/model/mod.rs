//! Host configuration.

pub mod config;

pub use config::AppConfig;
