//! 动态/作品数据

pub mod loader;
pub mod model;

pub use loader::load_feed;
pub use model::{filter_items, FeedFilter, FeedItem, SortOrder};
