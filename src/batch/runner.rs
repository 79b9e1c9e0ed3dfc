//! # 批量执行器
//!
//! 顺序或并行执行批量解压任务。
//!
//! ## 功能
//! - `jobs == 1` 时按顺序在当前线程执行
//! - `jobs > 1` 时基于 rayon 线程池并行
//! - 单文件错误（`FileOutcome::Failed`）汇总后继续
//! - 致命错误（`Err`）立即停止批处理并返回
//!
//! ## 依赖关系
//! - 被 `commands/extract.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::error::{FileError, Result};
use crate::utils::progress;

use indicatif::ProgressBar;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// 单个文件处理结果
#[derive(Debug)]
pub enum FileOutcome {
    /// 已写出
    Written {
        input: PathBuf,
        output: PathBuf,
        bytes: usize,
    },
    /// 读取或解压失败
    Failed { input: PathBuf, error: FileError },
}

impl FileOutcome {
    pub fn input(&self) -> &Path {
        match self {
            FileOutcome::Written { input, .. } | FileOutcome::Failed { input, .. } => input,
        }
    }
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// 成功数量
    pub written: usize,
    /// 失败数量
    pub failed: usize,
    /// 全部结果（按输入顺序）
    pub outcomes: Vec<FileOutcome>,
}

impl BatchSummary {
    /// 合并处理结果
    pub fn merge(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Written { .. } => self.written += 1,
            FileOutcome::Failed { .. } => self.failed += 1,
        }
        self.outcomes.push(outcome);
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.written + self.failed
    }

    /// 失败详情
    pub fn failures(&self) -> impl Iterator<Item = (&Path, &FileError)> {
        self.outcomes.iter().filter_map(|o| match o {
            FileOutcome::Failed { input, error } => Some((input.as_path(), error)),
            FileOutcome::Written { .. } => None,
        })
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
    /// 是否显示进度条
    progress: bool,
}

impl BatchRunner {
    /// 创建新的批量执行器（`jobs == 0` 表示使用全部 CPU）
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self {
            jobs,
            progress: true,
        }
    }

    /// 设置是否显示进度条
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 处理文件列表
    ///
    /// 处理函数通过传入的进度条输出日志（`ProgressBar::suspend`），
    /// 返回 `Err` 时整个批次中止。
    pub fn run<F>(&self, files: &[PathBuf], processor: F) -> Result<BatchSummary>
    where
        F: Fn(&Path, &ProgressBar) -> Result<FileOutcome> + Sync + Send,
    {
        let pb = if self.progress {
            progress::create_progress_bar(files.len() as u64, "Decompressing")
        } else {
            ProgressBar::hidden()
        };

        let step = |file: &PathBuf| {
            let result = processor(file, &pb);
            pb.inc(1);
            result
        };

        let outcomes: Result<Vec<FileOutcome>> = if self.jobs <= 1 {
            files.iter().map(step).collect()
        } else {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.jobs)
                .build()?;
            pool.install(|| files.par_iter().map(step).collect())
        };

        pb.finish_and_clear();

        let mut summary = BatchSummary::default();
        for outcome in outcomes? {
            summary.merge(outcome);
        }

        Ok(summary)
    }
}
