//! # incflate - 包含文件解压工具
//!
//! 还原 `.ch` / `.th` 压缩包含文件中的文本：跳过 14 字节头部，
//! raw deflate 解压，丢弃末尾哨兵字节，按 UTF-8 写出。
//!
//! ## 子命令
//! - `extract` - 批量解压目录（缺省子命令，默认 `include/` → 当前目录）
//! - `cat`     - 解压单个文件到 stdout
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── codec/   (头部跳过 + raw deflate + 文本解码)
//!   │     └── batch/   (文件收集、批量执行、报告)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod codec;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.into_command()) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
