//! 键盘输入处理

use crossterm::event::{KeyCode, KeyModifiers};
use std::time::{Duration, Instant};

/// 导航动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Previous,
    Next,
    First,
    Last,
    /// 页内向上滚动一行
    ScrollUp,
    /// 页内向下滚动一行
    ScrollDown,
    /// 输入页码的一位数字
    Digit(u8),
    /// 确认输入的页码
    Confirm,
    /// 删除最后一位输入
    Backspace,
    Refresh,
    Quit,
}

/// 键盘输入处理器
pub struct KeyboardHandler {
    last_key_time: Instant,
    last_key_code: Option<KeyCode>,
    debounce: Duration,
    typed_page: String,
}

impl KeyboardHandler {
    /// 创建新的键盘处理器
    pub fn new(debounce: Duration) -> Self {
        Self {
            last_key_time: Instant::now(),
            last_key_code: None,
            debounce,
            typed_page: String::new(),
        }
    }

    /// 判断是否应该处理按键（防抖处理）
    pub fn should_process_key(
        &mut self,
        code: &KeyCode,
        now: Instant,
    ) -> bool {
        let is_same_key =
            self.last_key_code.as_ref() == Some(code);

        // 同一个键必须间隔指定时间
        if is_same_key
            && now.duration_since(self.last_key_time)
                < self.debounce
        {
            return false;
        }

        self.last_key_code = Some(*code);
        self.last_key_time = now;
        true
    }

    /// 按键映射为导航动作
    pub fn map_key(
        code: KeyCode,
        modifiers: KeyModifiers,
    ) -> Option<NavAction> {
        match (code, modifiers) {
            (KeyCode::Char('c'), m)
                if m.contains(KeyModifiers::CONTROL) =>
            {
                Some(NavAction::Quit)
            }
            (KeyCode::Esc, _) | (KeyCode::Char('q'), _) => {
                Some(NavAction::Quit)
            }
            (KeyCode::Left, _)
            | (KeyCode::PageUp, _)
            | (KeyCode::Char('h'), _)
            | (KeyCode::Char('p'), _) => Some(NavAction::Previous),
            (KeyCode::Right, _)
            | (KeyCode::PageDown, _)
            | (KeyCode::Char('l'), _)
            | (KeyCode::Char('n'), _) => Some(NavAction::Next),
            (KeyCode::Up, _) | (KeyCode::Char('k'), _) => {
                Some(NavAction::ScrollUp)
            }
            (KeyCode::Down, _) | (KeyCode::Char('j'), _) => {
                Some(NavAction::ScrollDown)
            }
            (KeyCode::Home, _) => Some(NavAction::First),
            (KeyCode::End, _) => Some(NavAction::Last),
            (KeyCode::Char(c), _) if c.is_ascii_digit() => {
                Some(NavAction::Digit(c as u8 - b'0'))
            }
            (KeyCode::Enter, _) => Some(NavAction::Confirm),
            (KeyCode::Backspace, _) => Some(NavAction::Backspace),
            (KeyCode::Char('r'), _) => Some(NavAction::Refresh),
            _ => None,
        }
    }

    /// 当前已输入的页码文本
    pub fn typed_page(&self) -> &str {
        &self.typed_page
    }

    /// 追加一位数字
    pub fn push_digit(&mut self, digit: u8) {
        // 防止溢出，最多保留 9 位
        if self.typed_page.len() < 9 {
            self.typed_page.push(char::from(b'0' + digit));
        }
    }

    /// 删除最后一位
    pub fn pop_digit(&mut self) {
        self.typed_page.pop();
    }

    /// 取出并清空已输入的页码
    pub fn take_typed_page(&mut self) -> Option<usize> {
        let typed = std::mem::take(&mut self.typed_page);
        typed.parse().ok()
    }
}

impl Default for KeyboardHandler {
    /// 150ms 防抖
    fn default() -> Self {
        Self::new(Duration::from_millis(150))
    }
}
