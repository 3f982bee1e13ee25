//! Configuration data structures.
//!
//! Pure data only: no validation, no policy. Adapters decide what to do with
//! these values.

pub mod app_config;

pub use app_config::AppConfig;
