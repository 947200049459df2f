pub mod sort_icon_header_cell;

pub use sort_icon_header_cell::SortIconHeaderCell;
