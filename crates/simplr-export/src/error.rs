use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("trailer image could not be read: {0}")]
    Image(String),

    #[error("trailer image has no area ({width}x{height})")]
    EmptyImage { width: usize, height: usize },

    #[error("PDF generation failed: {0}")]
    Pdf(String),
}

impl From<imagesize::ImageError> for ExportError {
    fn from(e: imagesize::ImageError) -> Self {
        ExportError::Image(e.to_string())
    }
}
