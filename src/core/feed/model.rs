//! 动态/作品条目

use chrono::NaiveDate;
use serde::Deserialize;

/// 单条动态或作品
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedItem {
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// 按日期排序的方向
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// 最新在前
    #[default]
    Newest,
    /// 最早在前
    Oldest,
}

/// 按日期稳定排序
pub fn sort_by_date(items: &mut [FeedItem], order: SortOrder) {
    match order {
        SortOrder::Newest => items.sort_by(|a, b| b.date.cmp(&a.date)),
        SortOrder::Oldest => items.sort_by(|a, b| a.date.cmp(&b.date)),
    }
}

/// 关键词与标签过滤条件，均不区分大小写
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedFilter {
    /// 在标题、摘要和标签中查找的关键词
    pub query: Option<String>,
    /// 必须完整匹配的标签
    pub tag: Option<String>,
}

impl FeedFilter {
    /// 创建过滤条件，空白字符串视为未设置
    pub fn new(query: Option<&str>, tag: Option<&str>) -> Self {
        let normalize = |value: Option<&str>| {
            value
                .map(|v| v.trim().to_lowercase())
                .filter(|v| !v.is_empty())
        };
        Self {
            query: normalize(query),
            tag: normalize(tag.map(|t| t.trim().trim_start_matches('#'))),
        }
    }

    /// 是否没有任何条件
    pub fn is_empty(&self) -> bool {
        self.query.is_none() && self.tag.is_none()
    }

    /// 条目是否满足全部条件
    pub fn matches(&self, item: &FeedItem) -> bool {
        let tag_ok = self.tag.as_ref().map_or(true, |tag| {
            item.tags.iter().any(|t| t.to_lowercase() == *tag)
        });
        let query_ok = self.query.as_ref().map_or(true, |query| {
            item.title.to_lowercase().contains(query)
                || item.summary.to_lowercase().contains(query)
                || item.tags.iter().any(|t| t.to_lowercase().contains(query))
        });
        tag_ok && query_ok
    }
}

/// 按条件过滤，保持原有顺序
pub fn filter_items(items: &[FeedItem], filter: &FeedFilter) -> Vec<FeedItem> {
    items
        .iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, date: &str) -> FeedItem {
        FeedItem {
            title: title.to_string(),
            date: date.parse().unwrap(),
            summary: String::new(),
            link: None,
            tags: Vec::new(),
        }
    }

    fn titles(items: &[FeedItem]) -> Vec<&str> {
        items.iter().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn newest_first_keeps_ties_in_order() {
        let mut items = vec![
            item("a", "2023-01-01"),
            item("b", "2024-05-01"),
            item("c", "2023-01-01"),
        ];
        sort_by_date(&mut items, SortOrder::Newest);
        assert_eq!(vec!["b", "a", "c"], titles(&items));
    }

    #[test]
    fn oldest_first() {
        let mut items = vec![
            item("b", "2024-05-01"),
            item("a", "2023-01-01"),
        ];
        sort_by_date(&mut items, SortOrder::Oldest);
        assert_eq!(vec!["a", "b"], titles(&items));
    }

    fn tagged(title: &str, summary: &str, tags: &[&str]) -> FeedItem {
        FeedItem {
            summary: summary.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..item(title, "2024-01-01")
        }
    }

    fn sample() -> Vec<FeedItem> {
        vec![
            tagged("Spring Concert", "Live at the hall", &["live", "music"]),
            tagged("New single", "Out on all platforms", &["music"]),
            tagged("Studio diary", "Mixing the new album", &["studio"]),
        ]
    }

    #[test]
    fn query_matches_title_summary_and_tags() {
        let items = sample();

        let by_title = filter_items(&items, &FeedFilter::new(Some("concert"), None));
        assert_eq!(vec!["Spring Concert"], titles(&by_title));

        let by_summary = filter_items(&items, &FeedFilter::new(Some("ALBUM"), None));
        assert_eq!(vec!["Studio diary"], titles(&by_summary));

        let by_tag_text = filter_items(&items, &FeedFilter::new(Some("stud"), None));
        assert_eq!(vec!["Studio diary"], titles(&by_tag_text));
    }

    #[test]
    fn tag_must_match_exactly_and_combines_with_query() {
        let items = sample();

        let music = filter_items(&items, &FeedFilter::new(None, Some("#Music")));
        assert_eq!(vec!["Spring Concert", "New single"], titles(&music));

        let partial = filter_items(&items, &FeedFilter::new(None, Some("mus")));
        assert!(partial.is_empty());

        let both = filter_items(
            &items,
            &FeedFilter::new(Some("single"), Some("music")),
        );
        assert_eq!(vec!["New single"], titles(&both));
    }

    #[test]
    fn blank_filter_keeps_everything() {
        let filter = FeedFilter::new(Some("  "), Some(""));
        assert!(filter.is_empty());
        assert_eq!(3, filter_items(&sample(), &filter).len());
    }

    #[test]
    fn no_match_gives_empty_list() {
        let none = filter_items(&sample(), &FeedFilter::new(Some("podcast"), None));
        assert!(none.is_empty());
    }
}
