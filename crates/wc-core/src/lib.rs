//! # wc-core
//!
//! Core domain models and business logic for WineCellar.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod catalog;
pub mod config;
pub mod ids;
pub mod ports;
pub mod wine;

// Re-export commonly used types at the crate root
pub use catalog::CatalogCandidate;
pub use config::AppConfig;
pub use ids::WineId;
pub use wine::{CellarStats, DraftEntry, NewWineRecord, WineRecord};
