//! JSON 数据文件加载

use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::model::{sort_by_date, FeedItem, SortOrder};
use crate::app::error::types::FeedPagerError;

/// 解析 JSON 数组文本
pub fn parse_feed(text: &str) -> Result<Vec<FeedItem>, FeedPagerError> {
    let items: Vec<FeedItem> = serde_json::from_str(text)?;
    Ok(items)
}

/// 读取并排序数据文件
pub fn load_feed(
    path: &Path,
    order: SortOrder,
) -> Result<Vec<FeedItem>, FeedPagerError> {
    let path: PathBuf = path.absolutize()?.into_owned();
    if !path.exists() {
        return Err(FeedPagerError::FeedNotFound(
            path.display().to_string(),
        ));
    }

    debug!(path = %path.display(), "loading feed");
    let text = std::fs::read_to_string(&path)?;
    let mut items = parse_feed(&text)?;
    sort_by_date(&mut items, order);

    info!(count = items.len(), path = %path.display(), "feed loaded");
    Ok(items)
}
