//! # Raw deflate 解压
//!
//! 对不带 zlib/gzip 封装的 deflate 数据流进行解压。
//!
//! ## 行为
//! - 窗口大小固定为 15 位（deflate 最大值）
//! - 遇到流结束标记即停止，之后的多余字节忽略
//! - 输入在流结束前耗尽时返回已恢复的部分数据，不视为错误
//!
//! ## 依赖关系
//! - 被 `codec/mod.rs` 调用
//! - 使用 `flate2` 的底层 `Decompress` 接口

use crate::error::DecodeError;

use flate2::{Decompress, FlushDecompress, Status};

/// 输出缓冲区每次扩容的大小
const CHUNK_SIZE: usize = 32 * 1024;

/// 解压 raw deflate 数据
pub fn inflate_raw(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let mut inflater = Decompress::new(false);
    let mut out = Vec::with_capacity(input.len().saturating_mul(4).max(CHUNK_SIZE));

    loop {
        if out.len() == out.capacity() {
            out.reserve(CHUNK_SIZE);
        }

        let consumed = inflater.total_in() as usize;
        let produced = inflater.total_out();

        let status = inflater
            .decompress_vec(&input[consumed..], &mut out, FlushDecompress::None)
            .map_err(|e| DecodeError::Inflate(e.to_string()))?;

        match status {
            Status::StreamEnd => break,
            Status::Ok | Status::BufError => {
                // 无进展说明输入已耗尽，剩余输出已全部取出
                if inflater.total_in() as usize == consumed && inflater.total_out() == produced {
                    break;
                }
            }
        }
    }

    Ok(out)
}
