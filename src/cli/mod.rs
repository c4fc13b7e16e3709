//! 命令行界面模块

pub mod args;
pub mod feed_viewer;

use anyhow::Context;
use clap::Parser;
use colored::*;
use tracing::warn;

use crate::app::config::file::AppConfig;
use crate::app::error::types::Result;
use crate::core::feed::{load_feed, FeedFilter};
use crate::core::pagination::query::parse_page_param;

use self::args::CliArgs;
use self::feed_viewer::{FeedViewer, ViewerOptions};

/// 运行命令行界面
pub fn run_cli() -> Result<()> {
    let args = CliArgs::parse();

    // 检查文件是否存在
    if !args.file_path.exists() {
        eprintln!(
            "{} 文件不存在: {}",
            "错误".red().bold(),
            args.file_path.display()
        );
        std::process::exit(1);
    }

    if args.no_color {
        colored::control::set_override(false);
    }

    let config = AppConfig::load(args.config.as_deref())
        .context("failed to load config")?;

    let items = load_feed(
        &args.file_path,
        args.sort.unwrap_or(config.sort),
    )
    .with_context(|| {
        format!("failed to load {}", args.file_path.display())
    })?;

    let initial_page = match args.page.as_deref() {
        Some(raw) => {
            let parsed = parse_page_param(raw);
            if parsed.is_none() {
                warn!(page = raw, "ignoring unparsable page");
            }
            parsed
        }
        None => None,
    };

    let options = ViewerOptions {
        page_size: args.page_size.unwrap_or(config.page_size),
        initial_page,
        filter: FeedFilter::new(args.search.as_deref(), args.tag.as_deref()),
        breakpoints: config.breakpoints,
        use_color: !args.no_color,
    };
    let mut viewer = FeedViewer::new(items, options);

    if args.print {
        viewer.print_page(args.width)
    } else {
        viewer.run()
    }
}
