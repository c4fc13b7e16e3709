//! 页码窗口生成
//!
//! 根据当前页、总页数和导航配置，生成紧凑的页码序列（页码与省略号）。
//! 纯函数，无副作用。

use serde::Deserialize;

/// 页码窗口中的单个元素
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// 可点击的页码
    Page(usize),
    /// 不可交互的省略号
    Ellipsis,
}

/// 导航配置，随视口宽度变化
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// 当前页两侧各显示的页码数
    pub nearby_pages: usize,
    /// 距离边缘超过该页数时才插入中点快捷页
    pub mid_point_threshold: usize,
    /// 是否总是显示首页和末页
    pub always_show_first_last: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            nearby_pages: 2,
            mid_point_threshold: 10,
            always_show_first_last: true,
        }
    }
}

impl NavigationConfig {
    /// 不超过该页数时直接列出全部页码
    pub fn small_threshold(&self) -> usize {
        self.nearby_pages * 2 + 5
    }
}

/// 按顺序追加页码，维护最后一个页码
struct WindowBuilder {
    items: Vec<PageItem>,
    last_page: usize,
}

impl WindowBuilder {
    fn new() -> Self {
        Self {
            items: Vec::new(),
            last_page: 0,
        }
    }

    fn push_page(&mut self, page: usize) {
        self.items.push(PageItem::Page(page));
        self.last_page = page;
    }

    /// 与上一个页码不连续时先插入省略号
    fn push_page_with_gap(&mut self, page: usize) {
        if page != self.last_page + 1 {
            self.items.push(PageItem::Ellipsis);
        }
        self.push_page(page);
    }

    fn finish(mut self) -> Vec<PageItem> {
        self.items.dedup_by(|a, b| {
            *a == PageItem::Ellipsis && *b == PageItem::Ellipsis
        });
        self.items
    }
}

/// 计算页码窗口
///
/// 调用方保证 `1 <= current_page <= total_pages`；`total_pages <= 1` 时
/// 应直接隐藏分页控件而不是调用本函数。
pub fn compute_window(
    current_page: usize,
    total_pages: usize,
    config: &NavigationConfig,
) -> Vec<PageItem> {
    let nearby = config.nearby_pages;

    if total_pages <= config.small_threshold() {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let mut window = WindowBuilder::new();

    if config.always_show_first_last {
        window.push_page(1);
    }

    // 前中点
    if current_page > config.mid_point_threshold {
        let front_mid = (1 + current_page) / 2;
        if front_mid > nearby + 1 {
            window.push_page_with_gap(front_mid);
        }
    }

    // 当前页附近
    let start_page = current_page.saturating_sub(nearby).max(2);
    let end_page = (current_page + nearby).min(total_pages - 1);
    if start_page > 2 && start_page != window.last_page + 1 {
        window.items.push(PageItem::Ellipsis);
    }
    for page in start_page..=end_page {
        if page > window.last_page {
            window.push_page(page);
        }
    }

    // 后中点
    let threshold_gap = config.mid_point_threshold.saturating_sub(1);
    if current_page + threshold_gap < total_pages {
        let back_mid = (current_page + total_pages) / 2;
        if back_mid > end_page
            && back_mid < total_pages.saturating_sub(nearby + 1)
        {
            window.push_page_with_gap(back_mid);
        }
    }

    if config.always_show_first_last
        && window.last_page != total_pages
    {
        window.push_page_with_gap(total_pages);
    }

    window.finish()
}
