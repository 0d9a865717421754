//! Process command - extract data from a single receipt file.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use comprobante_core::models::config::ExtractorVariant;
use comprobante_core::{Comprobante, ExtractionResult, FieldViolation};

use super::{extract_file, load_config};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (.txt with OCR text, or PDF with a text layer)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Use the lightweight six-field extractor
    #[arg(long)]
    minimal: bool,

    /// Show OCR confidence, timing and warnings
    #[arg(long)]
    show_confidence: bool,

    /// Fail when the extracted record does not validate
    #[arg(long)]
    validate: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// File extension for outputs in this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if args.minimal {
        config.extraction.variant = ExtractorVariant::Minimal;
    }

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message("Extracting receipt data...");

    let result = extract_file(&args.input, &config)?;

    pb.finish_and_clear();

    let violations = if args.validate || config.validation.enabled {
        result.record.validate(&config.validation)
    } else {
        Vec::new()
    };
    report_violations(&violations);

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

    if args.show_confidence {
        eprintln!();
        if let Some(confidence) = result.confidence {
            eprintln!("{} OCR confidence: {:.1}%", style("ℹ").blue(), confidence);
        }
        eprintln!(
            "{} Processing time: {}ms",
            style("ℹ").blue(),
            result.processing_time_ms
        );
        for warning in &result.warnings {
            eprintln!("{} {}", style("!").yellow(), warning);
        }
    }

    debug!("Total processing time: {:?}", start.elapsed());

    if args.validate && !violations.is_empty() {
        anyhow::bail!("Validation failed with {} issue(s)", violations.len());
    }

    Ok(())
}

fn report_violations(violations: &[FieldViolation]) {
    if violations.is_empty() {
        return;
    }

    eprintln!("{}", style("Validation issues:").yellow());
    for violation in violations {
        eprintln!("  - {}", violation);
    }
}

/// Render an extraction result in the requested format.
pub fn format_result(result: &ExtractionResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(&result.record)?),
        OutputFormat::Csv => format_csv(&result.record),
        OutputFormat::Text => Ok(format_text(&result.record)),
    }
}

fn amount(value: Option<impl ToString>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn format_csv(record: &Comprobante) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "document_type",
        "document_number",
        "issue_date",
        "tax_id",
        "issuer_name",
        "customer_name",
        "items",
        "subtotal",
        "tax",
        "total",
    ])?;

    let (customer_name, items, subtotal, tax) = match record {
        Comprobante::Full(r) => (
            r.fields.customer_name.clone(),
            r.items.len().to_string(),
            amount(r.totals.subtotal),
            amount(r.totals.tax),
        ),
        Comprobante::Minimal(_) => Default::default(),
    };

    wtr.write_record([
        record.document_type(),
        record.document_number(),
        record.issue_date(),
        record.tax_id(),
        record.issuer_name(),
        customer_name.as_str(),
        items.as_str(),
        subtotal.as_str(),
        tax.as_str(),
        amount(record.total()).as_str(),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &Comprobante) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} {}\n",
        record.document_type(),
        record.document_number()
    ));
    output.push_str(&format!("Date: {}\n", record.issue_date()));
    output.push('\n');

    output.push_str("Issuer:\n");
    output.push_str(&format!("  {}\n", record.issuer_name()));
    output.push_str(&format!("  RUC: {}\n", record.tax_id()));

    if let Comprobante::Full(r) = record {
        if !r.fields.customer_name.is_empty() || r.fields.customer_document.is_some() {
            output.push_str("\nCustomer:\n");
            output.push_str(&format!("  {}\n", r.fields.customer_name));
            if let Some(doc) = &r.fields.customer_document {
                let kind = doc
                    .kind
                    .as_ref()
                    .map(|k| format!("{:?}", k).to_uppercase())
                    .unwrap_or_else(|| "DOC".to_string());
                output.push_str(&format!("  {}: {}\n", kind, doc.number));
            }
            if !r.fields.customer_address.is_empty() {
                output.push_str(&format!("  {}\n", r.fields.customer_address));
            }
        }

        if !r.items.is_empty() {
            output.push_str("\nItems:\n");
            for item in &r.items {
                output.push_str(&format!(
                    "  {} x {} @ {} = {}\n",
                    item.quantity, item.description, item.unit_price, item.amount
                ));
            }
        }

        output.push_str("\nTotals:\n");
        output.push_str(&format!("  Subtotal: S/ {}\n", amount(r.totals.subtotal)));
        output.push_str(&format!("  IGV:      S/ {}\n", amount(r.totals.tax)));
    } else {
        output.push_str("\nTotals:\n");
    }
    output.push_str(&format!("  Total:    S/ {}\n", amount(record.total())));

    output
}
