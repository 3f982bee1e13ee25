pub mod wine_row;

pub use wine_row::WineRow;
