//! Проекция "Каталог товаров": товары, обогащённые категорией и владельцем.
//!
//! - `join` — однократное соединение a001/a002/a003 в `EnrichedProduct`
//! - `filter` — отбор видимых строк по пользователю и поисковой строке
//! - `filter_state` — состояние фильтров и чистый reducer действий UI

pub mod dto;
pub mod filter;
pub mod filter_state;
pub mod join;

pub use dto::{EnrichedProduct, UnresolvedReference};
pub use filter::{select_visible_products, UserFilter};
pub use filter_state::{FilterAction, FilterState};
pub use join::build_enriched_products;
