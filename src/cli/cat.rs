//! # cat 子命令 CLI 定义
//!
//! 解压单个文件，文本输出到 stdout
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/cat.rs`

use super::FramingArgs;
use clap::Args;
use std::path::PathBuf;

/// cat 子命令参数
#[derive(Args, Debug, Clone)]
pub struct CatArgs {
    /// Compressed include file
    pub file: PathBuf,

    #[command(flatten)]
    pub framing: FramingArgs,
}
