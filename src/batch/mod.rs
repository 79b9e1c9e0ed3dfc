//! # 批量处理模块
//!
//! 提供统一的文件批量处理能力。
//!
//! ## 功能
//! - 按扩展名收集待处理文件
//! - 顺序或并行处理
//! - 进度反馈与统计
//! - CSV 处理报告
//!
//! ## 依赖关系
//! - 被 `commands/extract.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod report;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchRunner, BatchSummary, FileOutcome};
