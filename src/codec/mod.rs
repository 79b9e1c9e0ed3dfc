//! # 解码模块
//!
//! 将 `.ch` / `.th` 包含文件还原为文本。
//!
//! ## 文件布局
//! ```text
//! ┌──────────────┬──────────────────────────────┐
//! │ header (14B) │ raw deflate stream           │
//! └──────────────┴──────────────────────────────┘
//!                  └─ 解压后: text ... + sentinel (1B)
//! ```
//!
//! ## 处理流程
//! 1. 跳过固定长度头部（不校验内容）
//! 2. raw deflate 解压
//! 3. 丢弃末尾哨兵字节
//! 4. UTF-8 解码，非法序列替换为 U+FFFD
//!
//! ## 依赖关系
//! - 被 `commands/extract.rs`, `commands/cat.rs` 调用
//! - 子模块: inflate

pub mod inflate;

pub use inflate::inflate_raw;

use crate::error::DecodeError;

use std::borrow::Cow;

/// 默认头部长度
pub const DEFAULT_HEADER_LEN: usize = 14;

/// 默认末尾哨兵长度
pub const DEFAULT_TRAILER_LEN: usize = 1;

/// 文件封装参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Framing {
    /// 解压前跳过的头部字节数
    pub header_len: usize,
    /// 解压后丢弃的末尾字节数
    pub trailer_len: usize,
    /// 输入短于头部时是否报错
    pub strict: bool,
}

impl Default for Framing {
    fn default() -> Self {
        Self {
            header_len: DEFAULT_HEADER_LEN,
            trailer_len: DEFAULT_TRAILER_LEN,
            strict: false,
        }
    }
}

impl Framing {
    pub fn new(header_len: usize, trailer_len: usize) -> Self {
        Self {
            header_len,
            trailer_len,
            strict: false,
        }
    }

    /// 设置严格模式
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// 解码结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// 还原出的文本
    pub text: String,
    /// 解压后（去除哨兵前）的字节数
    pub inflated_len: usize,
    /// 是否发生过 UTF-8 替换
    pub lossy: bool,
    /// 输入是否短于头部
    pub short_input: bool,
}

/// 解码单个文件内容
pub fn decode(bytes: &[u8], framing: &Framing) -> Result<Decoded, DecodeError> {
    let short_input = bytes.len() < framing.header_len;
    if short_input && framing.strict {
        return Err(DecodeError::ShortInput {
            len: bytes.len(),
            header_len: framing.header_len,
        });
    }

    let payload = bytes.get(framing.header_len..).unwrap_or(&[]);
    let inflated = inflate_raw(payload)?;

    let keep = inflated.len().saturating_sub(framing.trailer_len);
    let (text, lossy) = match String::from_utf8_lossy(&inflated[..keep]) {
        Cow::Borrowed(s) => (s.to_string(), false),
        Cow::Owned(s) => (s, true),
    };

    Ok(Decoded {
        text,
        inflated_len: inflated.len(),
        lossy,
        short_input,
    })
}
