//! # extract 子命令 CLI 定义
//!
//! 批量解压目录中的包含文件
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/extract.rs`

use super::FramingArgs;
use clap::Args;
use std::path::PathBuf;

/// extract 子命令参数
#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    /// Directory containing the compressed include files
    #[arg(short, long, env = "INCFLATE_INPUT", default_value = "include")]
    pub input: PathBuf,

    /// Directory the decompressed_<name>.txt files are written to
    #[arg(short, long, env = "INCFLATE_OUTPUT", default_value = ".")]
    pub output: PathBuf,

    /// File name suffixes to process (comma separated, case sensitive)
    #[arg(short, long, value_delimiter = ',', default_values = [".ch", ".th"])]
    pub ext: Vec<String>,

    #[command(flatten)]
    pub framing: FramingArgs,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 1)]
    pub jobs: usize,

    /// Write a per-file CSV report
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Disable the progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
}
