//! Printable document export.
//!
//! The bill view hands rendered markup and a title to a [`PrintExporter`];
//! what "printing" means is up to the exporter. [`HtmlDocumentExporter`]
//! writes a standalone HTML page that opens the print dialog on load.

use std::fs;
use std::path::{Path, PathBuf};

use askama::Template;
use thiserror::Error;

/// Title of the printable bill document.
pub const BILL_TITLE: &str = "Bill - Resto 2.0";

/// Errors raised while exporting a printable document.
#[derive(Debug, Error)]
pub enum ExportError {
    /// There is nothing to print.
    #[error("nothing to export")]
    Empty,

    #[error("failed to render printable document: {0}")]
    Render(#[from] askama::Error),

    #[error("failed to write printable document: {0}")]
    Io(#[from] std::io::Error),
}

/// Produces a user-facing print/PDF artifact from rendered markup.
pub trait PrintExporter {
    /// Export `markup` under the given document title.
    ///
    /// Returns where the document ended up.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Empty`] for empty markup, or an error if the
    /// document cannot be produced.
    fn export(&self, markup: &str, title: &str) -> Result<PathBuf, ExportError>;
}

/// Standalone printable page.
#[derive(Template)]
#[template(path = "print/document.html")]
pub struct PrintDocumentTemplate<'a> {
    pub title: &'a str,
    pub body: &'a str,
}

/// Writes a self-contained HTML document to a fixed path.
#[derive(Debug, Clone)]
pub struct HtmlDocumentExporter {
    path: PathBuf,
}

impl HtmlDocumentExporter {
    /// An exporter writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Target path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PrintExporter for HtmlDocumentExporter {
    fn export(&self, markup: &str, title: &str) -> Result<PathBuf, ExportError> {
        if markup.trim().is_empty() {
            return Err(ExportError::Empty);
        }
        let document = PrintDocumentTemplate {
            title,
            body: markup,
        }
        .render()?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, document)?;
        tracing::info!(path = %self.path.display(), title, "Printable document written");
        Ok(self.path.clone())
    }
}
