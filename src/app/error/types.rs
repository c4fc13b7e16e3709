//! 错误类型定义

use thiserror::Error;

/// 分页浏览器错误类型
#[derive(Error, Debug)]
pub enum FeedPagerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid feed data: {0}")]
    InvalidFeed(#[from] serde_json::Error),

    #[error("Invalid config file: {0}")]
    InvalidConfig(#[from] toml::de::Error),

    #[error("Feed file not found: {0}")]
    FeedNotFound(String),
}

/// 应用程序通用结果类型
pub type Result<T> = anyhow::Result<T>;
