//! # wc-app
//!
//! Application layer for WineCellar: the cellar view-model (the
//! reconciliation core between the in-memory mirror and the inventory
//! store) and the builder that assembles it from ports.

pub mod builder;
pub mod view_model;

pub use builder::AppBuilder;
pub use view_model::{CellarViewModel, CommitOutcome, DrinkOutcome};
