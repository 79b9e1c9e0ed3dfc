//! # 统一错误处理模块
//!
//! 定义 incflate 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分级
//! - `IncflateError`: 致命错误，向上传播并终止进程（例如输出文件写入失败）
//! - `FileError`: 单文件可恢复错误（读取失败 / 解压失败），记录后继续批处理
//! - `DecodeError`: 纯解码层错误，由 `codec` 模块产生
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// incflate 统一错误类型（致命）
#[derive(Error, Debug)]
pub enum IncflateError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}: {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}: {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 解码错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to decode {path}: {source}")]
    DecodeFailed {
        path: String,
        #[source]
        source: DecodeError,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 运行时
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// 解码错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// 头部之后的数据不是合法的 raw deflate 流
    #[error("invalid deflate data: {0}")]
    Inflate(String),

    /// 严格模式下输入短于头部长度
    #[error("input is {len} bytes, shorter than the {header_len}-byte header")]
    ShortInput { len: usize, header_len: usize },
}

/// 单文件可恢复错误
#[derive(Error, Debug)]
pub enum FileError {
    #[error("{0}")]
    Read(#[from] std::io::Error),

    #[error("{0}")]
    Decode(#[from] DecodeError),
}

impl FileError {
    /// 错误类别（用于报告）
    pub fn kind(&self) -> &'static str {
        match self {
            FileError::Read(_) => "read",
            FileError::Decode(_) => "decode",
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, IncflateError>;
