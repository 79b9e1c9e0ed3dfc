//! # cat 命令实现
//!
//! 解压单个文件并将文本写到 stdout，便于重定向：
//! `incflate cat include/sigawin.ch > sigawin.h`
//!
//! ## 依赖关系
//! - 使用 `cli/cat.rs` 定义的参数
//! - 使用 `codec/`
//! - 使用 `utils/output.rs`（警告输出到 stderr）

use crate::cli::cat::CatArgs;
use crate::codec::{self, Decoded, Framing};
use crate::error::{IncflateError, Result};
use crate::utils::output;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// 执行 cat 命令
pub fn execute(args: CatArgs) -> Result<()> {
    let decoded = decode_file(&args.file, &args.framing.framing())?;

    if decoded.short_input {
        output::eprint_warning(&format!(
            "{} is shorter than the {}-byte header",
            args.file.display(),
            args.framing.header_len
        ));
    }
    if decoded.lossy {
        output::eprint_warning(&format!(
            "{} contains invalid UTF-8, replaced with U+FFFD",
            args.file.display()
        ));
    }

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(decoded.text.as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(|e| IncflateError::FileWriteError {
            path: "<stdout>".to_string(),
            source: e,
        })?;

    Ok(())
}

/// 读取并解码单个文件（任何失败都是致命错误）
pub fn decode_file(path: &Path, framing: &Framing) -> Result<Decoded> {
    let bytes = fs::read(path).map_err(|e| IncflateError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    codec::decode(&bytes, framing).map_err(|e| IncflateError::DecodeFailed {
        path: path.display().to_string(),
        source: e,
    })
}
