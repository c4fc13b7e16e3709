//! 命令行参数定义

use clap::Parser;
use std::path::PathBuf;

use crate::core::feed::SortOrder;

/// 动态/作品分页浏览器 - 读取 JSON 数据文件并分页显示
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// JSON 数据文件路径
    #[arg(short, long, value_name = "FILE")]
    pub file_path: PathBuf,

    /// 每页条目数 (默认: 配置文件或 5)
    #[arg(short = 's', long = "page-size")]
    pub page_size: Option<usize>,

    /// 起始页，支持 `3` 或 `?page=3`
    #[arg(short, long, value_name = "PAGE")]
    pub page: Option<String>,

    /// 只显示标题、摘要或标签中包含该关键词的条目
    #[arg(short = 'q', long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// 只显示带有该标签的条目
    #[arg(short = 't', long = "tag", value_name = "TAG")]
    pub tag: Option<String>,

    /// 按日期排序方向
    #[arg(long, value_enum)]
    pub sort: Option<SortOrder>,

    /// 配置文件路径 (默认: <config_dir>/feed-pager/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// 只输出一页后退出，不进入交互模式
    #[arg(long)]
    pub print: bool,

    /// 输出宽度，仅用于 --print (默认: 终端宽度)
    #[arg(short, long)]
    pub width: Option<u16>,

    /// 禁用颜色输出
    #[arg(long = "no-color")]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_command_line() {
        let args = CliArgs::try_parse_from([
            "feed-pager",
            "-f",
            "dynamics.json",
            "--page-size",
            "8",
            "--page",
            "?page=3",
            "--sort",
            "oldest",
            "--search",
            "live",
            "-t",
            "music",
            "--print",
            "--no-color",
        ])
        .unwrap();

        assert_eq!(PathBuf::from("dynamics.json"), args.file_path);
        assert_eq!(Some(8), args.page_size);
        assert_eq!(Some("?page=3"), args.page.as_deref());
        assert_eq!(Some(SortOrder::Oldest), args.sort);
        assert_eq!(Some("live"), args.search.as_deref());
        assert_eq!(Some("music"), args.tag.as_deref());
        assert!(args.print);
        assert!(args.no_color);
    }

    #[test]
    fn file_is_required() {
        assert!(CliArgs::try_parse_from(["feed-pager"]).is_err());
    }
}
