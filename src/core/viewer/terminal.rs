//! 终端管理模块

use crate::app::error::types::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;

/// 终端不可用时的回退尺寸
const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// 终端管理器
pub struct TerminalManager {
    is_raw_mode: bool,
}

impl TerminalManager {
    /// 创建新的终端管理器
    pub fn new() -> Self {
        Self { is_raw_mode: false }
    }

    /// 进入原始模式与备用屏幕
    pub fn enter_raw_mode(&mut self) -> Result<()> {
        self.enter_with(terminal::enable_raw_mode, || {
            execute!(io::stdout(), EnterAlternateScreen, Hide)
        })
    }

    fn enter_with(
        &mut self,
        enable: impl FnOnce() -> io::Result<()>,
        setup: impl FnOnce() -> io::Result<()>,
    ) -> Result<()> {
        if !self.is_raw_mode {
            enable()?;
            // 先置位，备用屏幕切换失败时 Drop 仍会恢复终端
            self.is_raw_mode = true;
            setup()?;
        }
        Ok(())
    }

    /// 退出原始模式
    pub fn exit_raw_mode(&mut self) -> Result<()> {
        if self.is_raw_mode {
            self.is_raw_mode = false;
            let screen = execute!(io::stdout(), Show, LeaveAlternateScreen);
            terminal::disable_raw_mode()?;
            screen?;
        }
        Ok(())
    }

    /// 清空屏幕并回到左上角
    pub fn clear_screen(&self) -> Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    /// 获取终端尺寸（列, 行）
    pub fn get_size(&self) -> (u16, u16) {
        terminal::size().unwrap_or(FALLBACK_SIZE)
    }
}

impl Default for TerminalManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        let _ = self.exit_raw_mode();
    }
}
