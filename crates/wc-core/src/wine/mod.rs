//! Wine inventory domain models.

pub mod draft;
pub mod record;
pub mod stats;

pub use draft::DraftEntry;
pub use record::{NewWineRecord, WineRecord};
pub use stats::{CellarStats, UNKNOWN_COUNTRY};
