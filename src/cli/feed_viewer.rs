//! 动态/作品分页查看器

use colored::*;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::io::{self, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::app::error::types::Result;
use crate::core::feed::{filter_items, FeedFilter, FeedItem};
use crate::core::input::keyboard::{KeyboardHandler, NavAction};
use crate::core::pagination::query::format_page_param;
use crate::core::pagination::{compute_window, NavigationConfig, PaginationState};
use crate::core::viewer::breakpoints::{select_config, Breakpoint, ResizeDebouncer};
use crate::core::viewer::card_display::CardDisplayer;
use crate::core::viewer::terminal::TerminalManager;

/// 分页栏与帮助信息占用的行数
const FOOTER_LINES: usize = 5;

/// 没有待处理的尺寸事件时的输入等待时间
const IDLE_POLL: Duration = Duration::from_millis(500);

/// 查看器选项
#[derive(Debug, Clone)]
pub struct ViewerOptions {
    pub page_size: usize,
    pub initial_page: Option<usize>,
    pub filter: FeedFilter,
    pub breakpoints: Vec<Breakpoint>,
    pub use_color: bool,
}

/// 动态/作品查看器
pub struct FeedViewer {
    items: Vec<FeedItem>,
    pagination: PaginationState,
    breakpoints: Vec<Breakpoint>,
    nav: NavigationConfig,
    displayer: CardDisplayer,
    use_color: bool,
    width: u16,
    rows: u16,
    // 页内滚动的起始行，翻页时归零
    body_offset: usize,
    // 交互组件
    terminal_manager: TerminalManager,
    keyboard_handler: KeyboardHandler,
    resize_debouncer: ResizeDebouncer,
}

impl FeedViewer {
    /// 创建新的查看器
    pub fn new(items: Vec<FeedItem>, options: ViewerOptions) -> Self {
        let terminal_manager = TerminalManager::new();
        let (width, rows) = terminal_manager.get_size();

        // 先过滤，总页数按过滤后的条目计算
        let items = if options.filter.is_empty() {
            items
        } else {
            let filtered = filter_items(&items, &options.filter);
            info!(
                total = items.len(),
                matched = filtered.len(),
                filter = ?options.filter,
                "feed filtered"
            );
            filtered
        };

        let mut pagination =
            PaginationState::new(items.len(), options.page_size);
        if let Some(requested) = options.initial_page {
            let page = pagination.clamp_page(requested);
            if page != requested {
                info!(requested, page, "initial page clamped");
            }
            pagination.go_to_page(page);
        }

        let nav = select_config(&options.breakpoints, width);

        Self {
            items,
            pagination,
            nav,
            breakpoints: options.breakpoints,
            displayer: CardDisplayer::new(width as usize, options.use_color),
            use_color: options.use_color,
            width,
            rows,
            body_offset: 0,
            terminal_manager,
            keyboard_handler: KeyboardHandler::default(),
            resize_debouncer: ResizeDebouncer::default(),
        }
    }

    /// 当前分页状态
    #[cfg(test)]
    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    /// 当前导航配置
    #[cfg(test)]
    pub fn nav(&self) -> NavigationConfig {
        self.nav
    }

    /// 可分享的当前位置
    pub fn location(&self) -> String {
        format_page_param(self.pagination.current_page())
    }

    /// 按新的视口宽度重新选择导航配置
    pub fn reconfigure(&mut self, width: u16) {
        self.width = width;
        self.displayer.set_width(width as usize);
        let nav = select_config(&self.breakpoints, width);
        if nav != self.nav {
            debug!(width, ?nav, "navigation reconfigured");
            self.nav = nav;
        }
        self.clamp_body_offset();
    }

    /// 视口尺寸变化：更新行数并按宽度重新配置
    pub fn resize(&mut self, width: u16, rows: u16) {
        self.rows = rows;
        self.reconfigure(width);
    }

    /// 页面正文可用的行数
    fn body_rows(&self) -> usize {
        (self.rows as usize).saturating_sub(FOOTER_LINES).max(1)
    }

    fn max_body_offset(&self) -> usize {
        self.render_body().len().saturating_sub(self.body_rows())
    }

    fn clamp_body_offset(&mut self) {
        self.body_offset = self.body_offset.min(self.max_body_offset());
    }

    /// 翻页成功时回到页首
    fn turn_page(&mut self, changed: bool) -> bool {
        if changed {
            self.body_offset = 0;
        }
        changed
    }

    /// 执行导航动作，返回是否需要重绘
    pub fn apply(&mut self, action: NavAction) -> bool {
        match action {
            NavAction::Previous => {
                let changed = self.pagination.previous();
                self.turn_page(changed)
            }
            NavAction::Next => {
                let changed = self.pagination.next();
                self.turn_page(changed)
            }
            NavAction::First => {
                let changed = self.pagination.go_to_first_page();
                self.turn_page(changed)
            }
            NavAction::Last => {
                let changed = self.pagination.go_to_last_page();
                self.turn_page(changed)
            }
            NavAction::ScrollUp => {
                if self.body_offset > 0 {
                    self.body_offset -= 1;
                    true
                } else {
                    false
                }
            }
            NavAction::ScrollDown => {
                if self.body_offset < self.max_body_offset() {
                    self.body_offset += 1;
                    true
                } else {
                    false
                }
            }
            NavAction::Digit(d) => {
                self.keyboard_handler.push_digit(d);
                true
            }
            NavAction::Backspace => {
                self.keyboard_handler.pop_digit();
                true
            }
            NavAction::Confirm => {
                if let Some(requested) =
                    self.keyboard_handler.take_typed_page()
                {
                    let page = self.pagination.clamp_page(requested);
                    let changed = self.pagination.go_to_page(page);
                    self.turn_page(changed);
                }
                // 输入框已清空，总是重绘
                true
            }
            NavAction::Refresh => true,
            NavAction::Quit => false,
        }
    }

    /// 当前页全部卡片的行
    fn render_body(&self) -> Vec<String> {
        if self.items.is_empty() {
            return vec![self.paint_dim("暂无内容")];
        }

        let mut body = Vec::new();
        for item in self.pagination.current_slice(&self.items) {
            body.extend(self.displayer.render_card(item));
            body.push(String::new());
        }
        body
    }

    /// 渲染整屏内容
    ///
    /// 正文超过 `max_body_lines` 时从 `body_offset` 开始截取，并在状态行提示滚动范围。
    pub fn render_lines(&self, max_body_lines: Option<usize>) -> Vec<String> {
        let body = self.render_body();
        let body_len = body.len();

        let mut scroll_hint = None;
        let mut lines: Vec<String> = match max_body_lines {
            Some(max) if body_len > max => {
                let offset = self.body_offset.min(body_len - max);
                scroll_hint = Some(format!(
                    " | 行 {}-{} / {} ↑↓ 滚动",
                    offset + 1,
                    offset + max,
                    body_len
                ));
                body.into_iter().skip(offset).take(max).collect()
            }
            _ => body,
        };

        lines.push("=".repeat(self.width.clamp(20, 80) as usize));

        if !self.items.is_empty() {
            let mut status = format!(
                "第 {} 页 / 共 {} 页 (共 {} 条, 每页 {} 条)",
                self.pagination.current_page(),
                self.pagination.total_pages(),
                self.pagination.item_count(),
                self.pagination.page_size()
            );
            if let Some(hint) = scroll_hint {
                status.push_str(&hint);
            }
            lines.push(if self.use_color {
                status.bright_white().bold().to_string()
            } else {
                status
            });
        }

        // 只有一页时隐藏分页栏
        if self.pagination.needs_controls() {
            let window = compute_window(
                self.pagination.current_page(),
                self.pagination.total_pages(),
                &self.nav,
            );
            lines.push(
                self.displayer
                    .render_page_bar(&window, self.pagination.current_page()),
            );
        }

        let typed = self.keyboard_handler.typed_page();
        if !typed.is_empty() {
            lines.push(format!("跳转到: {}", typed));
        }

        lines.push(self.paint_dim(
            "导航: ←→ 翻页 | ↑↓ 滚动 | Home/End 首页/末页 | 数字+Enter 跳页 | r 刷新 | ESC/q 退出",
        ));
        lines
    }

    /// 非交互模式：输出当前页后退出
    pub fn print_page(&mut self, width: Option<u16>) -> Result<()> {
        if let Some(width) = width {
            self.reconfigure(width);
        }
        let mut stdout = io::stdout().lock();
        for line in self.render_lines(None) {
            writeln!(stdout, "{}", line)?;
        }
        Ok(())
    }

    /// 运行交互模式
    pub fn run(&mut self) -> Result<()> {
        self.terminal_manager.enter_raw_mode()?;
        let result = self.interactive_loop();
        self.terminal_manager.exit_raw_mode()?;

        println!("继续浏览: --page '{}'", self.location());
        result
    }

    /// 交互循环
    fn interactive_loop(&mut self) -> Result<()> {
        let mut needs_redraw = true;

        loop {
            if needs_redraw {
                self.draw()?;
                needs_redraw = false;
            }

            let now = Instant::now();
            let timeout = self
                .resize_debouncer
                .time_until_due(now)
                .unwrap_or(IDLE_POLL);

            let event = if event::poll(timeout)? {
                Some(event::read()?)
            } else {
                None
            };

            match self.handle_event(event, Instant::now()) {
                Some(redraw) => needs_redraw |= redraw,
                None => break,
            }
        }

        Ok(())
    }

    /// 处理一个终端事件（超时为 `None`），返回 `None` 表示退出，否则返回是否需要重绘
    fn handle_event(
        &mut self,
        event: Option<Event>,
        now: Instant,
    ) -> Option<bool> {
        let mut needs_redraw = false;

        match event {
            Some(Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            })) => {
                if self.keyboard_handler.should_process_key(&code, now) {
                    match KeyboardHandler::map_key(code, modifiers) {
                        Some(NavAction::Quit) => return None,
                        Some(action) => needs_redraw = self.apply(action),
                        None => {}
                    }
                }
            }
            Some(Event::Resize(width, rows)) => {
                self.resize_debouncer.record((width, rows), now);
            }
            // 其他事件忽略，但仍要检查尺寸防抖
            _ => {}
        }

        if let Some((width, rows)) = self.resize_debouncer.poll(now) {
            self.resize(width, rows);
            needs_redraw = true;
        }

        Some(needs_redraw)
    }

    /// 重绘整屏
    fn draw(&self) -> Result<()> {
        self.terminal_manager.clear_screen()?;
        let mut stdout = io::stdout().lock();
        // 原始模式下需要显式的 \r\n
        for line in self.render_lines(Some(self.body_rows())) {
            write!(stdout, "{}\r\n", line)?;
        }
        stdout.flush()?;
        Ok(())
    }

    fn paint_dim(&self, text: &str) -> String {
        if self.use_color {
            text.bright_black().to_string()
        } else {
            text.to_string()
        }
    }
}
