//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - 无子命令: 等同于 `extract`，全部使用默认值（`include/` → 当前目录）
//! - `extract`: 批量解压目录中的 `.ch` / `.th` 文件
//! - `cat`: 解压单个文件并输出到 stdout
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: extract, cat

pub mod cat;
pub mod extract;

use crate::codec::{Framing, DEFAULT_HEADER_LEN, DEFAULT_TRAILER_LEN};

use clap::{Args, Parser, Subcommand};

/// incflate - 包含文件解压工具
#[derive(Parser, Debug)]
#[command(name = "incflate")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Recover the text of compressed .ch/.th include files", long_about = None)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub extract: extract::ExtractArgs,
}

impl Cli {
    /// 解析出实际执行的子命令（缺省为 extract）
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Extract(self.extract))
    }
}

/// 可用的子命令
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decompress every matching file in a directory (default)
    Extract(extract::ExtractArgs),

    /// Decompress a single file and print the text to stdout
    Cat(cat::CatArgs),
}

/// 文件封装参数（extract 与 cat 共用）
#[derive(Args, Debug, Clone)]
pub struct FramingArgs {
    /// Number of leading header bytes skipped before inflating
    #[arg(long, env = "INCFLATE_HEADER_LEN", default_value_t = DEFAULT_HEADER_LEN)]
    pub header_len: usize,

    /// Number of trailing bytes dropped from the inflated payload
    #[arg(long, env = "INCFLATE_TRAILER_LEN", default_value_t = DEFAULT_TRAILER_LEN)]
    pub trailer_len: usize,

    /// Treat files shorter than the header as errors
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

impl FramingArgs {
    pub fn framing(&self) -> Framing {
        Framing::new(self.header_len, self.trailer_len).strict(self.strict)
    }
}
