//! Batch processing command for multiple receipt files.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use futures_util::stream::{self, StreamExt};
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use comprobante_core::ExtractionResult;

use super::process::{format_result, OutputFormat};
use super::{extension_of, extract_file, load_config, SUPPORTED_EXTENSIONS};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Number of parallel workers
    #[arg(short = 'j', long, default_value = "4")]
    jobs: usize,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    result: Option<ExtractionResult>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = Arc::new(load_config(config_path)?);

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| SUPPORTED_EXTENSIONS.contains(&extension_of(p).as_str()))
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let overall_pb = ProgressBar::new(files.len() as u64);
    overall_pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let mut pending = stream::iter(files.into_iter().map(|path| {
        let config = Arc::clone(&config);
        run_blocking(path, move |path| extract_file(path, &config))
    }))
    .buffer_unordered(args.jobs.max(1));

    let mut results = Vec::new();
    while let Some((path, result, processing_time_ms)) = pending.next().await {
        match result {
            Ok(result) => results.push(ProcessResult {
                path,
                result: Some(result),
                error: None,
                processing_time_ms,
            }),
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(ProcessResult {
                        path,
                        result: None,
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    overall_pb.abandon();
                    anyhow::bail!("Processing failed for {}: {}", path.display(), error_msg);
                }
            }
        }

        overall_pb.inc(1);
    }

    overall_pb.finish_and_clear();

    // Completion order is arbitrary
    results.sort_by(|a, b| a.path.cmp(&b.path));

    let successful: Vec<_> = results.iter().filter(|r| r.result.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    if let Some(output_dir) = &args.output_dir {
        for processed in &successful {
            let Some(result) = &processed.result else {
                continue;
            };

            let output_name = processed
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("receipt");
            let output_path =
                output_dir.join(format!("{}.{}", output_name, args.format.extension()));

            fs::write(&output_path, format_result(result, args.format)?)?;
            debug!("Wrote output to {}", output_path.display());
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for processed in &failed {
            println!(
                "  - {}: {}",
                processed.path.display(),
                processed.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

/// Run `work` for one file on the blocking pool.
///
/// A panicking worker is reported as a failure of that file, so the path is
/// kept outside the task.
async fn run_blocking<T, F>(path: PathBuf, work: F) -> (PathBuf, anyhow::Result<T>, u64)
where
    T: Send + 'static,
    F: FnOnce(&Path) -> anyhow::Result<T> + Send + 'static,
{
    let start = Instant::now();
    let task_path = path.clone();
    let joined = tokio::task::spawn_blocking(move || work(&task_path)).await;
    let elapsed = start.elapsed().as_millis() as u64;

    let result = match joined {
        Ok(result) => result,
        Err(e) => Err(anyhow::anyhow!("worker failed: {}", e)),
    };
    (path, result, elapsed)
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "document_type",
        "document_number",
        "issue_date",
        "tax_id",
        "issuer_name",
        "total",
        "warnings",
        "processing_time_ms",
        "error",
    ])?;

    for processed in results {
        let filename = processed
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        let time_ms = processed.processing_time_ms.to_string();

        if let Some(result) = &processed.result {
            let record = &result.record;
            let total = record.total().map(|t| t.to_string()).unwrap_or_default();
            let warnings = result.warnings.len().to_string();

            wtr.write_record([
                filename,
                "success",
                record.document_type(),
                record.document_number(),
                record.issue_date(),
                record.tax_id(),
                record.issuer_name(),
                total.as_str(),
                warnings.as_str(),
                time_ms.as_str(),
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                "",
                "",
                "",
                "",
                time_ms.as_str(),
                processed.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_worker_panic_becomes_file_error() {
        let (path, result, _) = run_blocking(PathBuf::from("bad.pdf"), |_| -> anyhow::Result<()> {
            panic!("malformed content stream")
        })
        .await;

        assert_eq!(path, PathBuf::from("bad.pdf"));
        let message = result.unwrap_err().to_string();
        assert!(message.starts_with("worker failed"));
    }

    #[tokio::test]
    async fn test_worker_result_passes_through() {
        let (path, result, _) =
            run_blocking(PathBuf::from("a.txt"), |p| Ok(p.display().to_string())).await;

        assert_eq!(path, PathBuf::from("a.txt"));
        assert_eq!(result.unwrap(), "a.txt");
    }
}
