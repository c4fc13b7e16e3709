//! 显示工具函数

/// 按字符数截断，超出部分以 `…` 结尾
pub fn truncate_chars(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// 按单词折行，单个过长的单词按字符硬切
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            lines.push(word.drain(..width).collect());
        }
        if word.is_empty() {
            continue;
        }

        let needed = if line_len == 0 { word.len() } else { word.len() + 1 };
        if line_len + needed > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.extend(word.iter());
        line_len += word.len();
    }

    if line_len > 0 {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!("abc", truncate_chars("abc", 3));
        assert_eq!("ab…", truncate_chars("abcd", 3));
        assert_eq!("", truncate_chars("abcd", 0));
    }

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(
            vec!["one two", "three"],
            wrap_text("one two three", 8)
        );
        assert!(wrap_text("   ", 8).is_empty());
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(
            vec!["a", "bcdef", "gh"],
            wrap_text("a bcdefgh", 5)
        );
    }
}
