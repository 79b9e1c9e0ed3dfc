//! # 文件收集器
//!
//! 根据输入目录和扩展名列表收集待处理文件。
//!
//! ## 功能
//! - 扩展名后缀匹配（区分大小写）
//! - 可选递归目录搜索
//! - 结果按路径排序，保证多次运行顺序一致
//!
//! ## 依赖关系
//! - 被 `commands/extract.rs` 调用
//! - 使用 `walkdir` 遍历目录

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 默认处理的扩展名
pub const DEFAULT_EXTENSIONS: [&str; 2] = [".ch", ".th"];

/// 文件收集器
pub struct FileCollector {
    /// 输入目录
    input: PathBuf,
    /// 允许的扩展名后缀
    extensions: Vec<String>,
    /// 是否递归
    recursive: bool,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            recursive: false,
        }
    }

    /// 设置扩展名列表
    pub fn with_extensions(mut self, extensions: &[String]) -> Self {
        self.extensions = extensions
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        self
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的文件
    pub fn collect(&self) -> Vec<PathBuf> {
        if !self.input.is_dir() {
            return vec![];
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let mut files: Vec<PathBuf> = WalkDir::new(&self.input)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|entry| self.matches(entry.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        files
    }

    /// 检查文件名是否以任一扩展名结尾
    fn matches(&self, path: &Path) -> bool {
        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        self.extensions.iter().any(|ext| filename.ends_with(ext.as_str()))
    }
}
