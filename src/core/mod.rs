pub mod feed;
pub mod input;
pub mod pagination;
pub mod viewer;
