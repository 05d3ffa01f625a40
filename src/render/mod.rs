//! Deterministic rendering of a finalized submission into the five-page
//! catalog PDF.

pub mod catalog;
pub mod common;

pub use catalog::CatalogRenderer;

use thiserror::Error;

/// Failure while producing the document artifact.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to assemble the PDF document: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("failed to serialize the PDF document: {0}")]
    Io(#[from] std::io::Error),
}

/// Rendered catalog artifact, ready for preview and download.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    /// Suggested download filename, `proposta-comercial-folhita-{ts}.pdf`.
    pub filename: String,
    pub pdf: Vec<u8>,
    pub page_count: usize,
}
