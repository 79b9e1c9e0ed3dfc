//! # 处理报告导出
//!
//! 将批处理结果导出为 CSV，每个输入文件一行。
//!
//! ## 列
//! `input, output, status, bytes, error_kind, error`
//!
//! ## 依赖关系
//! - 被 `commands/extract.rs` 调用
//! - 使用 `batch/runner.rs` 的 BatchSummary 结构
//! - 使用 `csv` + `serde` 写入

use crate::batch::{BatchSummary, FileOutcome};
use crate::error::{IncflateError, Result};

use serde::Serialize;
use std::path::Path;

/// 报告行
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ReportRow {
    pub input: String,
    pub output: String,
    pub status: &'static str,
    pub bytes: Option<usize>,
    pub error_kind: &'static str,
    pub error: String,
}

impl From<&FileOutcome> for ReportRow {
    fn from(outcome: &FileOutcome) -> Self {
        let input = outcome.input().display().to_string();
        match outcome {
            FileOutcome::Written { output, bytes, .. } => ReportRow {
                input,
                output: output.display().to_string(),
                status: "written",
                bytes: Some(*bytes),
                error_kind: "",
                error: String::new(),
            },
            FileOutcome::Failed { error, .. } => ReportRow {
                input,
                output: String::new(),
                status: "failed",
                bytes: None,
                error_kind: error.kind(),
                error: error.to_string(),
            },
        }
    }
}

/// 导出处理报告为 CSV
pub fn to_csv(summary: &BatchSummary, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for outcome in &summary.outcomes {
        wtr.serialize(ReportRow::from(outcome))?;
    }

    wtr.flush().map_err(|e| IncflateError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
