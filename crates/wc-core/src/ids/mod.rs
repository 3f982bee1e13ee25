//! Identifier types.

pub mod wine_id;

pub use wine_id::WineId;
