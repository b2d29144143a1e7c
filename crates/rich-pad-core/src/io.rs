//! File import and export.
//!
//! Import validates the file (type allowlist, size cap), decodes it with
//! encoding detection, and converts plain text to markup. Export derives
//! the output format from the target extension and writes either the raw
//! markup or the extracted plain text.

use std::path::Path;

use anyhow::{Context, Result};

use crate::encoding::{decode_text, normalize_line_endings, TextEncoding};
use crate::error::ImportError;
use crate::text::{markup_to_plain, plain_to_markup};

/// Import size cap.
pub const MAX_IMPORT_BYTES: u64 = 5 * 1024 * 1024;

/// Extensions accepted by the import dialog and validation.
pub const IMPORT_EXTENSIONS: &[&str] = &[
    "txt", "md", "markdown", "rtf", "html", "htm", "json", "xml", "csv", "log",
];

/// Lowercased extension of a file name, if it has one.
pub fn file_extension(file_name: &str) -> Option<String> {
    let (stem, extension) = file_name.rsplit_once('.')?;
    if stem.is_empty() || extension.is_empty() {
        return None;
    }
    Some(extension.to_ascii_lowercase())
}

/// Whether the file name carries an importable extension.
pub fn is_supported_import(file_name: &str) -> bool {
    file_extension(file_name)
        .map(|ext| IMPORT_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Size validation, split out from `import_file` for testability.
pub fn validate_import_size(file_name: &str, size: u64) -> Result<(), ImportError> {
    if size > MAX_IMPORT_BYTES {
        return Err(ImportError::TooLarge {
            file_name: file_name.to_string(),
            size_mb: size as f64 / (1024.0 * 1024.0),
            limit_mb: MAX_IMPORT_BYTES / (1024 * 1024),
        });
    }
    Ok(())
}

/// A successfully imported document, ready to seed a session.
#[derive(Debug, Clone)]
pub struct ImportedDocument {
    pub file_name: String,
    /// Canonical markup content.
    pub markup: String,
    pub encoding: TextEncoding,
}

/// Reads and decodes a file into markup.
///
/// HTML files are taken as markup directly; anything else is decoded as
/// plain text and converted.
///
/// # Errors
///
/// Returns an `ImportError` for unsupported types, oversized files, read
/// failures, and undecodable content.
pub fn import_file(path: &Path) -> Result<ImportedDocument, ImportError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document.txt".to_string());

    if !is_supported_import(&file_name) {
        return Err(ImportError::UnsupportedType { file_name });
    }

    let metadata = std::fs::metadata(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    validate_import_size(&file_name, metadata.len())?;

    let bytes = std::fs::read(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let (raw_text, encoding) = decode_text(&bytes).map_err(|source| ImportError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let text = normalize_line_endings(&raw_text);

    let markup = match file_extension(&file_name).as_deref() {
        Some("html") | Some("htm") => text,
        _ => plain_to_markup(&text),
    };

    Ok(ImportedDocument {
        file_name,
        markup,
        encoding,
    })
}

/// Output format for export, derived from the target file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    PlainText,
    Html,
}

impl ExportFormat {
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_ascii_lowercase().as_str() {
            "html" | "htm" => Self::Html,
            _ => Self::PlainText,
        }
    }

    pub fn for_file_name(file_name: &str) -> Self {
        file_extension(file_name)
            .map(|ext| Self::from_extension(&ext))
            .unwrap_or(Self::PlainText)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::PlainText => "txt",
            Self::Html => "html",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::PlainText => "text/plain",
            Self::Html => "text/html",
        }
    }
}

/// The bytes-to-write for a given markup snapshot and format.
pub fn export_payload(markup: &str, format: ExportFormat) -> String {
    match format {
        ExportFormat::PlainText => markup_to_plain(markup),
        ExportFormat::Html => markup.to_string(),
    }
}

/// Writes the markup to `path` in the format implied by its extension.
///
/// Returns the format that was used, so callers can report it.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn export_file(path: &Path, markup: &str) -> Result<ExportFormat> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let format = ExportFormat::for_file_name(&file_name);
    let payload = export_payload(markup, format);
    std::fs::write(path, payload)
        .with_context(|| format!("failed to write file: {}", path.display()))?;
    Ok(format)
}

/// Default export name for untitled documents, e.g.
/// `document_2026-08-06T14-03-21.txt`.
pub fn timestamped_file_name(base: &str, extension: &str) -> String {
    let stamp = chrono::Local::now().format("%Y-%m-%dT%H-%M-%S");
    format!("{base}_{stamp}.{extension}")
}
