//! Parse command - extract data from a single OCR response file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use tara_core::{OcrDocumentLoader, ParsingPipeline, ParsingResult};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input OCR response file (JSON)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Parsing file: {}", args.input.display());

    let document = OcrDocumentLoader::new().load_from_file(&args.input)?;
    let pipeline = ParsingPipeline::new(&config);
    let result = pipeline.process(Some(&document));

    let output = format_result(&result, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if !result.success {
        anyhow::bail!("parsing failed with {} errors", result.errors.len());
    }

    Ok(())
}

pub fn format_result(result: &ParsingResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Text => Ok(format_result_text(result)),
    }
}

fn format_result_text(result: &ParsingResult) -> String {
    let mut out = String::new();

    if result.success {
        out.push_str(&format!("{} parsing succeeded\n", style("✓").green()));
    } else {
        out.push_str(&format!("{} parsing failed\n", style("✗").red()));
    }

    if let Some(slip) = &result.data {
        out.push_str(&format!(
            "  date:           {}\n",
            slip.date.map_or("-".to_string(), |d| d.to_string())
        ));
        out.push_str(&format!(
            "  vehicle number: {}\n",
            slip.vehicle_number.as_deref().unwrap_or("-")
        ));
        out.push_str(&format!(
            "  counterparty:   {}\n",
            slip.company.as_deref().unwrap_or("-")
        ));
        for (label, weight) in [
            ("gross weight", &slip.gross_weight),
            ("tare weight", &slip.tare_weight),
            ("net weight", &slip.net_weight),
        ] {
            let formatted = weight.as_ref().map_or("-".to_string(), |w| {
                let value = w.value.map_or("?".to_string(), |v| format!("{v:.2}"));
                match w.measured_at {
                    Some(at) => format!("{value} {} (measured {at})", w.unit),
                    None => format!("{value} {}", w.unit),
                }
            });
            out.push_str(&format!("  {label:<14} {formatted}\n"));
        }
    }

    for error in &result.errors {
        out.push_str(&format!("  {} {}\n", style("error:").red(), error));
    }
    for warning in &result.warnings {
        out.push_str(&format!("  {} {}\n", style("warning:").yellow(), warning));
    }

    out
}
