//! # extract 命令实现
//!
//! 批量解压包含文件。
//!
//! ## 功能
//! - 扫描输入目录中匹配扩展名的文件
//! - 逐个解码并写出 `decompressed_<name>.txt`
//! - 读取 / 解压失败记录后继续，写入失败立即中止
//! - 打印失败汇总表，可选导出 CSV 报告
//!
//! ## 依赖关系
//! - 使用 `cli/extract.rs` 定义的参数
//! - 使用 `codec/`, `batch/`
//! - 使用 `utils/output.rs`

use crate::batch::{report, BatchRunner, BatchSummary, FileCollector, FileOutcome};
use crate::cli::extract::ExtractArgs;
use crate::codec::{self, Framing};
use crate::error::{FileError, IncflateError, Result};
use crate::utils::output;

use indicatif::ProgressBar;
use std::fs;
use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};

/// 失败汇总行
#[derive(Debug, Clone, Tabled)]
struct FailureRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Error")]
    error: String,
}

/// 执行 extract 命令
pub fn execute(args: ExtractArgs) -> Result<()> {
    if args.ext.iter().all(|e| e.trim().is_empty()) {
        return Err(IncflateError::InvalidArgument(
            "at least one extension is required".to_string(),
        ));
    }

    if !args.input.is_dir() {
        output::print_warning(&format!(
            "Include folder '{}' not found!",
            args.input.display()
        ));
        return Ok(());
    }

    output::print_header(&format!("Decompressing '{}'", args.input.display()));

    let files = FileCollector::new(args.input.clone())
        .with_extensions(&args.ext)
        .recursive(args.recursive)
        .collect();

    if files.is_empty() {
        output::print_warning(&format!(
            "No files matching {} under {}",
            args.ext.join(", "),
            args.input.display()
        ));
        return Ok(());
    }

    output::print_info(&format!("Found {} files to decompress", files.len()));

    fs::create_dir_all(&args.output).map_err(|e| IncflateError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    let runner = BatchRunner::new(args.jobs).with_progress(!args.no_progress);
    if runner.jobs() > 1 {
        output::print_info(&format!("Using {} parallel jobs", runner.jobs()));
    }
    let summary = run_batch(&files, &args.output, &args.framing.framing(), &runner)?;

    print_failures(&summary);

    output::print_done(&format!(
        "Decompressed {} of {} file(s) into '{}' ({} failed)",
        summary.written,
        summary.total(),
        args.output.display(),
        summary.failed
    ));

    if let Some(ref report_path) = args.report {
        report::to_csv(&summary, report_path)?;
        output::print_success(&format!("Report saved to '{}'", report_path.display()));
    }

    Ok(())
}

/// 对文件列表执行解码与写出
pub fn run_batch(
    files: &[PathBuf],
    output_dir: &Path,
    framing: &Framing,
    runner: &BatchRunner,
) -> Result<BatchSummary> {
    runner.run(files, |input, pb| process_file(input, output_dir, framing, pb))
}

/// 输出文件路径: `<output_dir>/decompressed_<file name>.txt`
pub fn output_path(output_dir: &Path, file_name: &str) -> PathBuf {
    output_dir.join(format!("decompressed_{}.txt", file_name))
}

/// 处理单个文件
///
/// 读取与解压失败返回 `FileOutcome::Failed`，写入失败返回 `Err`。
fn process_file(
    input: &Path,
    output_dir: &Path,
    framing: &Framing,
    pb: &ProgressBar,
) -> Result<FileOutcome> {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| input.display().to_string());

    pb.suspend(|| output::print_info(&format!("Processing {}...", name)));

    let decoded = match fs::read(input)
        .map_err(FileError::from)
        .and_then(|bytes| codec::decode(&bytes, framing).map_err(FileError::from))
    {
        Ok(decoded) => decoded,
        Err(error) => {
            pb.suspend(|| output::print_error(&format!("Error processing {}: {}", name, error)));
            return Ok(FileOutcome::Failed {
                input: input.to_path_buf(),
                error,
            });
        }
    };

    if decoded.short_input {
        pb.suspend(|| {
            output::print_warning(&format!(
                "{} is shorter than the {}-byte header, writing empty output",
                name, framing.header_len
            ))
        });
    } else if decoded.inflated_len == 0 {
        pb.suspend(|| output::print_warning(&format!("{} inflated to an empty payload", name)));
    }
    if decoded.lossy {
        pb.suspend(|| {
            output::print_warning(&format!(
                "{} contains invalid UTF-8, replaced with U+FFFD",
                name
            ))
        });
    }

    let out = output_path(output_dir, &name);
    fs::write(&out, decoded.text.as_bytes()).map_err(|e| IncflateError::FileWriteError {
        path: out.display().to_string(),
        source: e,
    })?;

    pb.suspend(|| {
        output::print_success(&format!("File '{}' created successfully.", out.display()))
    });

    Ok(FileOutcome::Written {
        input: input.to_path_buf(),
        output: out,
        bytes: decoded.text.len(),
    })
}

/// 打印失败汇总表
fn print_failures(summary: &BatchSummary) {
    let rows: Vec<FailureRow> = summary
        .failures()
        .map(|(path, error)| FailureRow {
            file: path.display().to_string(),
            kind: error.kind().to_string(),
            error: error.to_string(),
        })
        .collect();

    if !rows.is_empty() {
        output::print_header(&format!("{} file(s) failed", rows.len()));
        println!("{}", Table::new(&rows));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::FramingArgs;
    use flate2::write::DeflateEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn include_file(text: &[u8]) -> Vec<u8> {
        let mut enc = DeflateEncoder::new(Vec::new(), Compression::default());
        enc.write_all(text).unwrap();
        let mut file = vec![0xAB; 14];
        file.extend(enc.finish().unwrap());
        file
    }

    fn quiet_runner() -> BatchRunner {
        BatchRunner::new(1).with_progress(false)
    }

    fn args(input: PathBuf, output: PathBuf) -> ExtractArgs {
        ExtractArgs {
            input,
            output,
            ext: vec![".ch".to_string(), ".th".to_string()],
            framing: FramingArgs {
                header_len: 14,
                trailer_len: 1,
                strict: false,
            },
            recursive: false,
            jobs: 1,
            report: None,
            no_progress: true,
        }
    }

    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Path::new("out"), "sigawin.ch"),
            PathBuf::from("out/decompressed_sigawin.ch.txt")
        );
    }

    #[test]
    fn test_run_batch_mixed() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        fs::write(src.path().join("a.ch"), include_file(b"Hello, World!X")).unwrap();
        let mut broken = vec![0u8; 14];
        broken.extend([0xFF; 40]);
        fs::write(src.path().join("b.ch"), broken).unwrap();
        fs::write(src.path().join("c.th"), include_file(b"#define N 3\n\0")).unwrap();
        fs::write(src.path().join("d.txt"), include_file(b"ignored\0")).unwrap();

        let files = FileCollector::new(src.path().to_path_buf()).collect();
        assert_eq!(files.len(), 3);

        let summary = run_batch(&files, out.path(), &Framing::default(), &quiet_runner()).unwrap();
        assert_eq!(summary.written, 2);
        assert_eq!(summary.failed, 1);

        let failures: Vec<_> = summary.failures().collect();
        assert_eq!(failures[0].0, src.path().join("b.ch"));
        assert!(matches!(failures[0].1, FileError::Decode(_)));

        assert_eq!(
            fs::read_to_string(out.path().join("decompressed_a.ch.txt")).unwrap(),
            "Hello, World!"
        );
        assert_eq!(
            fs::read_to_string(out.path().join("decompressed_c.th.txt")).unwrap(),
            "#define N 3\n"
        );
        assert!(!out.path().join("decompressed_b.ch.txt").exists());
        assert!(!out.path().join("decompressed_d.txt.txt").exists());
    }

    #[test]
    fn test_run_batch_idempotent() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        fs::write(src.path().join("x.ch"), include_file(b"struct s { int a; };\0")).unwrap();
        let files = FileCollector::new(src.path().to_path_buf()).collect();

        run_batch(&files, out.path(), &Framing::default(), &quiet_runner()).unwrap();
        let first = fs::read(out.path().join("decompressed_x.ch.txt")).unwrap();
        run_batch(&files, out.path(), &Framing::default(), &quiet_runner()).unwrap();
        let second = fs::read(out.path().join("decompressed_x.ch.txt")).unwrap();

        assert_eq!(first, second);
        assert_eq!(first, b"struct s { int a; };");
    }

    #[test]
    fn test_run_batch_overwrites_existing_output() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        fs::write(src.path().join("x.ch"), include_file(b"new\0")).unwrap();
        fs::write(out.path().join("decompressed_x.ch.txt"), "old content, longer").unwrap();

        let files = FileCollector::new(src.path().to_path_buf()).collect();
        run_batch(&files, out.path(), &Framing::default(), &quiet_runner()).unwrap();

        assert_eq!(
            fs::read_to_string(out.path().join("decompressed_x.ch.txt")).unwrap(),
            "new"
        );
    }

    #[test]
    fn test_run_batch_read_error_is_recoverable() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        fs::write(src.path().join("ok.ch"), include_file(b"ok\0")).unwrap();
        let files = vec![src.path().join("gone.ch"), src.path().join("ok.ch")];

        let summary = run_batch(&files, out.path(), &Framing::default(), &quiet_runner()).unwrap();
        assert_eq!(summary.written, 1);
        assert!(matches!(
            summary.failures().next().unwrap().1,
            FileError::Read(_)
        ));
        assert!(out.path().join("decompressed_ok.ch.txt").exists());
    }

    #[test]
    fn test_run_batch_short_input() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        fs::write(src.path().join("tiny.ch"), b"abc").unwrap();
        let files = FileCollector::new(src.path().to_path_buf()).collect();

        let lenient = run_batch(&files, out.path(), &Framing::default(), &quiet_runner()).unwrap();
        assert_eq!(lenient.written, 1);
        assert_eq!(
            fs::read(out.path().join("decompressed_tiny.ch.txt")).unwrap(),
            b""
        );

        let strict = run_batch(
            &files,
            out.path(),
            &Framing::default().strict(true),
            &quiet_runner(),
        )
        .unwrap();
        assert_eq!(strict.failed, 1);
    }

    #[test]
    fn test_run_batch_write_error_is_fatal() {
        let src = tempfile::tempdir().unwrap();
        let scratch = tempfile::tempdir().unwrap();
        fs::write(src.path().join("a.ch"), include_file(b"a\0")).unwrap();
        fs::write(src.path().join("b.ch"), include_file(b"b\0")).unwrap();

        // 输出目录实际是一个普通文件
        let not_a_dir = scratch.path().join("out");
        fs::write(&not_a_dir, b"").unwrap();

        let files = FileCollector::new(src.path().to_path_buf()).collect();
        let result = run_batch(&files, &not_a_dir, &Framing::default(), &quiet_runner());
        assert!(matches!(result, Err(IncflateError::FileWriteError { .. })));
    }

    #[test]
    fn test_run_batch_parallel() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        for i in 0..16 {
            let text = format!("file {}\n\0", i);
            fs::write(src.path().join(format!("f{:02}.ch", i)), include_file(text.as_bytes()))
                .unwrap();
        }
        let files = FileCollector::new(src.path().to_path_buf()).collect();
        let runner = BatchRunner::new(4).with_progress(false);

        let summary = run_batch(&files, out.path(), &Framing::default(), &runner).unwrap();
        assert_eq!(summary.written, 16);
        assert_eq!(
            fs::read_to_string(out.path().join("decompressed_f07.ch.txt")).unwrap(),
            "file 7\n"
        );
    }

    #[test]
    fn test_execute_missing_directory() {
        let scratch = tempfile::tempdir().unwrap();
        let out = scratch.path().join("out");
        execute(args(scratch.path().join("include"), out.clone())).unwrap();
        assert!(!out.exists());
    }

    #[test]
    fn test_execute_empty_directory() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        fs::write(src.path().join("notes.md"), b"nothing").unwrap();
        execute(args(src.path().to_path_buf(), out.path().to_path_buf())).unwrap();
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_execute_with_report() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        fs::write(src.path().join("a.ch"), include_file(b"Hello, World!X")).unwrap();

        let mut a = args(src.path().to_path_buf(), out.path().join("texts"));
        a.report = Some(out.path().join("report.csv"));
        execute(a).unwrap();

        assert!(out.path().join("texts").join("decompressed_a.ch.txt").exists());
        let report = fs::read_to_string(out.path().join("report.csv")).unwrap();
        assert_eq!(report.lines().count(), 2);
        assert!(report.contains(",written,13,"));
    }

    #[test]
    fn test_execute_rejects_empty_extension_list() {
        let src = tempfile::tempdir().unwrap();
        let mut a = args(src.path().to_path_buf(), src.path().to_path_buf());
        a.ext = vec![" ".to_string()];
        assert!(matches!(execute(a), Err(IncflateError::InvalidArgument(_))));
    }
}
