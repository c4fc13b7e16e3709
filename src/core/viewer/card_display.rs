//! 卡片与分页栏显示

use colored::*;

use super::display_utils::{truncate_chars, wrap_text};
use crate::core::feed::FeedItem;
use crate::core::pagination::PageItem;

/// 卡片显示器
pub struct CardDisplayer {
    width: usize,
    use_color: bool,
}

impl CardDisplayer {
    /// 创建新的卡片显示器
    pub fn new(width: usize, use_color: bool) -> Self {
        Self {
            width: width.max(20),
            use_color,
        }
    }

    /// 更新可用宽度
    pub fn set_width(&mut self, width: usize) {
        self.width = width.max(20);
    }

    /// 渲染单张卡片，返回若干行
    pub fn render_card(&self, item: &FeedItem) -> Vec<String> {
        let mut lines = Vec::new();

        let date = item.date.format("%Y-%m-%d").to_string();
        let title_width = self.width.saturating_sub(date.len() + 3);
        let title = truncate_chars(&item.title, title_width);
        lines.push(if self.use_color {
            format!(
                "{}  {}",
                date.bright_blue(),
                title.bright_white().bold()
            )
        } else {
            format!("{}  {}", date, title)
        });

        for line in wrap_text(&item.summary, self.width.saturating_sub(4)) {
            lines.push(format!("    {}", line));
        }

        if !item.tags.is_empty() {
            let tags = item
                .tags
                .iter()
                .map(|t| format!("#{}", t))
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(if self.use_color {
                format!("    {}", tags.yellow())
            } else {
                format!("    {}", tags)
            });
        }

        if let Some(link) = &item.link {
            let link = truncate_chars(link, self.width.saturating_sub(4));
            lines.push(if self.use_color {
                format!("    {}", link.bright_black().underline())
            } else {
                format!("    {}", link)
            });
        }

        lines
    }

    /// 渲染分页栏：当前页加方括号，省略号不可点击
    pub fn render_page_bar(
        &self,
        items: &[PageItem],
        current_page: usize,
    ) -> String {
        items
            .iter()
            .map(|item| match *item {
                PageItem::Page(page) if page == current_page => {
                    let text = format!("[{}]", page);
                    if self.use_color {
                        text.black().on_bright_cyan().bold().to_string()
                    } else {
                        text
                    }
                }
                PageItem::Page(page) => page.to_string(),
                PageItem::Ellipsis => {
                    if self.use_color {
                        "…".bright_black().to_string()
                    } else {
                        "…".to_string()
                    }
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pagination::{compute_window, NavigationConfig};

    fn item() -> FeedItem {
        FeedItem {
            title: "Spring concert".to_string(),
            date: "2024-04-01".parse().unwrap(),
            summary: "Recorded live at the old hall".to_string(),
            link: Some("https://example.com/live".to_string()),
            tags: vec!["live".to_string(), "music".to_string()],
        }
    }

    #[test]
    fn plain_page_bar() {
        let displayer = CardDisplayer::new(80, false);
        let window = compute_window(10, 20, &NavigationConfig::default());
        assert_eq!(
            "1 … 8 9 [10] 11 12 … 15 … 20",
            displayer.render_page_bar(&window, 10)
        );
    }

    #[test]
    fn plain_card_lines() {
        let displayer = CardDisplayer::new(40, false);
        let lines = displayer.render_card(&item());
        assert_eq!(
            vec![
                "2024-04-01  Spring concert",
                "    Recorded live at the old hall",
                "    #live #music",
                "    https://example.com/live",
            ],
            lines
        );
    }

    #[test]
    fn narrow_card_wraps_summary() {
        let displayer = CardDisplayer::new(20, false);
        let lines = displayer.render_card(&item());
        assert!(lines.iter().all(|l| l.chars().count() <= 20));
        assert!(lines.len() > 4);
    }
}
