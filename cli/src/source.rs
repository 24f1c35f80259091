//! Loading input documents: renderer XML, captured JSON, or a PDF rendered
//! on the fly.

use std::fs;
use std::path::Path;
use std::process::Command;

use statext::Document;

/// Renderer invocation matching the offsets the layout passes expect.
const PDFTOHTML: &str = "pdftohtml";
const PDFTOHTML_ARGS: [&str; 4] = ["-zoom", "1.35", "-xml", "-stdout"];

/// Kind of input, by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// pdftohtml XML output
    Xml,
    /// Document captured as JSON
    Json,
    /// PDF, rendered with pdftohtml first
    Pdf,
}

impl InputKind {
    /// Detect the input kind from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "xml" => Some(Self::Xml),
            "json" => Some(Self::Json),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }
}

/// Load a document from any supported input.
pub fn load_document(path: &Path) -> Result<Document, Box<dyn std::error::Error>> {
    let kind = InputKind::from_path(path).ok_or_else(|| {
        format!(
            "Unsupported input '{}' (expected .xml, .json or .pdf)",
            path.display()
        )
    })?;
    log::debug!("loading {} as {:?}", path.display(), kind);

    let document = match kind {
        InputKind::Xml => statext::parse_file(path)?,
        InputKind::Json => Document::from_json(&fs::read_to_string(path)?)?,
        InputKind::Pdf => statext::parse_xml(&render_pdf(path)?)?,
    };
    Ok(document)
}

/// Run pdftohtml on a PDF and capture its XML.
fn render_pdf(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let output = Command::new(PDFTOHTML)
        .args(PDFTOHTML_ARGS)
        .arg(path)
        .output()
        .map_err(|e| format!("Failed to run {}: {}", PDFTOHTML, e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("{} failed on {}: {}", PDFTOHTML, path.display(), stderr.trim()).into());
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
