//! 分页逻辑模块

pub mod query;
pub mod state;
pub mod window;

pub use state::PaginationState;
pub use window::{compute_window, NavigationConfig, PageItem};
