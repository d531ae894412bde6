//! Menu loading and caching.
//!
//! The loader turns the plain-text menu file into a [`comanda_types::menu::Menu`];
//! the cache memoizes that result per process with an explicit refresh.

pub mod cache;
pub mod loader;

pub use cache::MenuCache;
pub use loader::parse_menu;
