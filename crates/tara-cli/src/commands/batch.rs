//! Batch processing command for multiple OCR response files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, warn};

use tara_core::{OcrDocumentLoader, ParsingPipeline, ParsingResult};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory for per-file results
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: super::parse::OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,
}

/// Result of processing a single file.
struct FileResult {
    path: PathBuf,
    result: Option<ParsingResult>,
    load_error: Option<String>,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|entry| entry.ok())
        .filter(|path| {
            path.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        })
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

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let loader = OcrDocumentLoader::new();
    let pipeline = ParsingPipeline::new(&config);

    let mut results = Vec::with_capacity(files.len());
    for path in files {
        let file_result = match loader.load_from_file(&path) {
            Ok(document) => FileResult {
                path: path.clone(),
                result: Some(pipeline.process(Some(&document))),
                load_error: None,
            },
            Err(e) => {
                warn!("Failed to load {}: {}", path.display(), e);
                FileResult {
                    path: path.clone(),
                    result: None,
                    load_error: Some(e.to_string()),
                }
            }
        };

        if let (Some(result), Some(output_dir)) = (&file_result.result, &args.output_dir) {
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("slip");
            let extension = match args.format {
                super::parse::OutputFormat::Json => "json",
                super::parse::OutputFormat::Text => "txt",
            };
            let output_path = output_dir.join(format!("{stem}.{extension}"));
            fs::write(&output_path, super::parse::format_result(result, args.format)?)?;
            debug!("Wrote output to {}", output_path.display());
        }

        results.push(file_result);
        progress.inc(1);
    }

    progress.finish_with_message("Complete");

    let parsed = results
        .iter()
        .filter(|r| r.result.as_ref().is_some_and(|p| p.success))
        .count();
    let failed = results.len() - parsed;

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
        "   {} parsed, {} failed",
        style(parsed).green(),
        style(failed).red()
    );

    let failures: Vec<&FileResult> = results
        .iter()
        .filter(|r| r.load_error.is_some() || r.result.as_ref().is_some_and(|p| !p.success))
        .collect();
    if !failures.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for failure in failures {
            let reason = failure
                .load_error
                .clone()
                .or_else(|| {
                    failure
                        .result
                        .as_ref()
                        .and_then(|p| p.errors.first().cloned())
                })
                .unwrap_or_else(|| "unknown error".to_string());
            println!("  - {}: {}", failure.path.display(), reason);
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct SummaryRow<'a> {
    file: String,
    success: bool,
    date: String,
    vehicle_number: &'a str,
    gross_kg: String,
    tare_kg: String,
    net_kg: String,
    errors: usize,
    warnings: usize,
}

fn write_summary(path: &PathBuf, results: &[FileResult]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    for file_result in results {
        let empty;
        let result = match &file_result.result {
            Some(result) => result,
            None => {
                empty = ParsingResult::failure_with(
                    file_result.load_error.clone().unwrap_or_default(),
                );
                &empty
            }
        };
        let slip = result.data.clone().unwrap_or_default();

        let weight_cell = |weight: &Option<tara_core::Weight>| {
            weight
                .as_ref()
                .and_then(|w| w.value)
                .map_or(String::new(), |v| format!("{v:.2}"))
        };

        writer.serialize(SummaryRow {
            file: file_result.path.display().to_string(),
            success: result.success,
            date: slip.date.map_or(String::new(), |d| d.to_string()),
            vehicle_number: slip.vehicle_number.as_deref().unwrap_or(""),
            gross_kg: weight_cell(&slip.gross_weight),
            tare_kg: weight_cell(&slip.tare_weight),
            net_kg: weight_cell(&slip.net_weight),
            errors: result.errors.len(),
            warnings: result.warnings.len(),
        })?;
    }

    writer.flush()?;
    Ok(())
}
