//! simplr-export
//!
//! Lab report generation. [`assemble::gather`] resolves the selected files,
//! [`layout::compose`] places the header, listings and trailer image, and
//! [`pdf::render`] draws the plan.

pub mod assemble;
pub mod error;
pub mod image;
pub mod layout;
pub mod pdf;
pub mod styles;
pub mod wrap;

use simplr_core::models::metadata::ReportMetadata;
use tracing::info;

use crate::assemble::SourceFile;
use crate::error::ExportError;
use crate::image::TrailerImage;
use crate::styles::ReportStyle;

/// A finished PDF, ready to download.
#[derive(Debug, Clone)]
pub struct Report {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub page_count: usize,
}

/// Lay out and render a report from already fetched sources.
pub fn generate_report(
    style: &ReportStyle,
    metadata: &ReportMetadata,
    files: &[SourceFile],
    trailer: &TrailerImage,
) -> Result<Report, ExportError> {
    let layout = layout::compose(style, metadata, files, Some(trailer));
    let title = format!("{} report", metadata.experiment_label);
    let bytes = pdf::render(&layout, &title, Some(trailer))?;

    info!(
        experiment = %metadata.experiment_label,
        sections = layout.sections.len(),
        pages = layout.page_count(),
        "report generated"
    );

    Ok(Report {
        bytes,
        file_name: metadata.report_file_name("pdf"),
        page_count: layout.page_count(),
    })
}
