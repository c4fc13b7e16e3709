//! 页码持久化参数（`?page=N`）

/// 从位置字符串中解析页码
///
/// 支持 `3`、`page=3`、`?page=3`、`?tab=x&page=3`，无法解析时返回 `None`。
/// 返回值未经范围限制，需交给 `PaginationState::clamp_page`。
pub fn parse_page_param(input: &str) -> Option<usize> {
    let input = input.trim();
    if let Ok(page) = input.parse::<usize>() {
        return Some(page);
    }

    let query = input
        .rsplit_once('?')
        .map(|(_, query)| query)
        .unwrap_or(input);

    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "page")
        .and_then(|(_, value)| value.trim().parse().ok())
}

/// 生成可分享的页码参数
pub fn format_page_param(page: usize) -> String {
    format!("?page={}", page)
}
