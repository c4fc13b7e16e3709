//! 终端显示

pub mod breakpoints;
pub mod card_display;
pub mod display_utils;
pub mod terminal;
