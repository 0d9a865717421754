//! CLI subcommands and the file pipeline they share.

pub mod batch;
pub mod config;
pub mod process;

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use comprobante_core::models::config::ComprobanteConfig;
use comprobante_core::{
    build_parser, ExtractionResult, OcrProvider, PdfTextProvider, PlainTextProvider,
};

/// Extensions the CLI can read without an image OCR engine.
pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["txt", "pdf"];

/// Load the configuration from `path`, or defaults when none is given.
pub fn load_config(path: Option<&str>) -> anyhow::Result<ComprobanteConfig> {
    match path {
        Some(path) => Ok(ComprobanteConfig::from_file(Path::new(path))?),
        None => Ok(ComprobanteConfig::default()),
    }
}

/// Lowercased file extension.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

/// Pick the text source for a file.
pub fn provider_for(path: &Path, config: &ComprobanteConfig) -> anyhow::Result<Box<dyn OcrProvider>> {
    let extension = extension_of(path);
    match extension.as_str() {
        "txt" => Ok(Box::new(PlainTextProvider::new())),
        "pdf" => Ok(Box::new(PdfTextProvider::from_config(&config.pdf))),
        "png" | "jpg" | "jpeg" | "tiff" | "tif" | "bmp" | "webp" => anyhow::bail!(
            "No OCR provider for .{} images. Run OCR first and pass the recognised text as a .txt file.",
            extension
        ),
        _ => anyhow::bail!("Unsupported file format: {}", extension),
    }
}

/// Read a file, recognise its text and extract the receipt.
pub fn extract_file(path: &Path, config: &ComprobanteConfig) -> anyhow::Result<ExtractionResult> {
    let provider = provider_for(path, config)?;
    let data = fs::read(path)?;

    info!("Reading {} with the {} provider", path.display(), provider.name());
    let ocr = provider.recognize(&data)?;
    debug!("Recognised {} chars at {:.1}% confidence", ocr.text.len(), ocr.confidence);

    let parser = build_parser(&config.extraction);
    Ok(parser.extract(&ocr)?)
}
