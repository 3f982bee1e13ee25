pub mod wine_repo;

pub use wine_repo::DieselInventoryStore;
