//! 分页状态

use tracing::debug;

/// 取出指定页对应的元素切片（页码从1开始）
pub fn slice_for_page<T>(
    items: &[T],
    current_page: usize,
    page_size: usize,
) -> &[T] {
    let start = current_page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(items.len());
    let end = current_page
        .saturating_mul(page_size)
        .min(items.len());
    &items[start..end]
}

/// 分页状态
///
/// 每次数据加载创建一次，只通过导航方法修改。
/// `total_pages == 0` 时 `current_page` 固定为 1，且所有导航均无效。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    current_page: usize,
    total_pages: usize,
    item_count: usize,
    page_size: usize,
}

impl PaginationState {
    /// 创建新的分页状态
    pub fn new(item_count: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            current_page: 1,
            total_pages: item_count.div_ceil(page_size),
            item_count,
            page_size,
        }
    }

    /// 获取当前页码（从1开始）
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// 获取总页数
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// 获取元素总数
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// 获取每页元素数
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// 是否需要显示分页控件
    pub fn needs_controls(&self) -> bool {
        self.total_pages > 1
    }

    /// 将外部输入的页码限制在 `[1, total_pages]`
    pub fn clamp_page(&self, requested: usize) -> usize {
        requested.clamp(1, self.total_pages.max(1))
    }

    /// 跳转到指定页，返回状态是否改变
    pub fn go_to_page(&mut self, target: usize) -> bool {
        if target < 1
            || target > self.total_pages
            || target == self.current_page
        {
            return false;
        }
        debug!(from = self.current_page, to = target, "go to page");
        self.current_page = target;
        true
    }

    /// 下一页
    pub fn next(&mut self) -> bool {
        self.go_to_page((self.current_page + 1).min(self.total_pages))
    }

    /// 上一页
    pub fn previous(&mut self) -> bool {
        self.go_to_page(self.current_page.saturating_sub(1).max(1))
    }

    /// 跳转到第一页
    pub fn go_to_first_page(&mut self) -> bool {
        self.go_to_page(1)
    }

    /// 跳转到最后一页
    pub fn go_to_last_page(&mut self) -> bool {
        self.go_to_page(self.total_pages)
    }

    /// 当前页的元素切片
    pub fn current_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        slice_for_page(items, self.current_page, self.page_size)
    }
}
