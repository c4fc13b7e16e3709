//! 配置文件加载

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::app::error::types::FeedPagerError;
use crate::core::feed::SortOrder;
use crate::core::viewer::breakpoints::{default_breakpoints, Breakpoint};

/// 默认每页条目数
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// 配置文件内容，未出现的字段使用默认值
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub page_size: usize,
    pub sort: SortOrder,
    pub breakpoints: Vec<Breakpoint>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            sort: SortOrder::default(),
            breakpoints: default_breakpoints(),
        }
    }
}

impl AppConfig {
    /// 解析 TOML 文本
    pub fn from_toml(text: &str) -> Result<Self, FeedPagerError> {
        let mut config: AppConfig = toml::from_str(text)?;
        if config.breakpoints.is_empty() {
            config.breakpoints = default_breakpoints();
        }
        if config.page_size == 0 {
            warn!("page_size = 0 in config, using default");
            config.page_size = DEFAULT_PAGE_SIZE;
        }
        for bp in &mut config.breakpoints {
            if bp.nav.mid_point_threshold == 0 {
                warn!(
                    max_width = ?bp.max_width,
                    "mid_point_threshold = 0 in config, using 1"
                );
                bp.nav.mid_point_threshold = 1;
            }
        }
        Ok(config)
    }

    /// 读取配置；未指定路径且默认位置不存在时使用默认配置
    pub fn load(explicit: Option<&Path>) -> Result<Self, FeedPagerError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        debug!(path = %path.display(), "loading config");
        let text = std::fs::read_to_string(&path)?;
        Self::from_toml(&text)
    }
}

/// 默认配置文件位置
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("feed-pager").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(DEFAULT_PAGE_SIZE, config.page_size);
        assert_eq!(SortOrder::Newest, config.sort);
        assert_eq!(default_breakpoints(), config.breakpoints);
    }

    #[test]
    fn breakpoints_are_read_in_order() {
        let text = r#"
            page_size = 8
            sort = "oldest"

            [[breakpoints]]
            max_width = 50
            nearby_pages = 0
            mid_point_threshold = 2

            [[breakpoints]]
            nearby_pages = 3
            always_show_first_last = false
        "#;
        let config = AppConfig::from_toml(text).unwrap();

        assert_eq!(8, config.page_size);
        assert_eq!(SortOrder::Oldest, config.sort);
        assert_eq!(2, config.breakpoints.len());
        assert_eq!(Some(50), config.breakpoints[0].max_width);
        assert_eq!(2, config.breakpoints[0].nav.mid_point_threshold);
        assert!(config.breakpoints[0].nav.always_show_first_last);
        assert_eq!(None, config.breakpoints[1].max_width);
        assert_eq!(3, config.breakpoints[1].nav.nearby_pages);
        assert!(!config.breakpoints[1].nav.always_show_first_last);
    }

    #[test]
    fn zero_page_size_falls_back() {
        let config = AppConfig::from_toml("page_size = 0").unwrap();
        assert_eq!(DEFAULT_PAGE_SIZE, config.page_size);
    }

    #[test]
    fn zero_mid_point_threshold_is_raised_to_one() {
        let text = r#"
            [[breakpoints]]
            max_width = 50
            mid_point_threshold = 0

            [[breakpoints]]
            mid_point_threshold = 4
        "#;
        let config = AppConfig::from_toml(text).unwrap();
        assert_eq!(1, config.breakpoints[0].nav.mid_point_threshold);
        assert_eq!(4, config.breakpoints[1].nav.mid_point_threshold);
    }

    #[test]
    fn bad_toml_is_an_error() {
        assert!(matches!(
            AppConfig::from_toml("page_size = \"many\""),
            Err(FeedPagerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn explicit_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("feed-pager-no-such-config.toml");
        let _ = std::fs::remove_file(&path);
        assert!(matches!(
            AppConfig::load(Some(&path)),
            Err(FeedPagerError::Io(_))
        ));
    }
}
