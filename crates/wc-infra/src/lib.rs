//! # wc-infra
//!
//! Infrastructure adapters for WineCellar: the SQLite inventory store, the
//! local JSON-file inventory store, the HTTP catalog client, the filesystem
//! photo store, and the system clock.

pub mod bootstrap;
pub mod catalog;
pub mod db;
pub mod localstore;
pub mod photos;
pub mod time;

pub use time::SystemClock;
