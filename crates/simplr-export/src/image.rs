use crate::error::ExportError;

/// The fixed image appended after the last source listing.
#[derive(Debug, Clone)]
pub struct TrailerImage {
    bytes: Vec<u8>,
    width: usize,
    height: usize,
}

impl TrailerImage {
    /// Read the intrinsic pixel size from the image header. The bytes are
    /// kept for embedding at render time.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, ExportError> {
        let size = imagesize::blob_size(&bytes)?;
        if size.width == 0 || size.height == 0 {
            return Err(ExportError::EmptyImage {
                width: size.width,
                height: size.height,
            });
        }

        Ok(Self {
            bytes,
            width: size.width,
            height: size.height,
        })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }
}

/// Scale a `width` x `height` box to fit inside `max_width` x `max_height`,
/// keeping its aspect ratio. Small images are scaled up to the budget.
pub fn fit_within(width: f32, height: f32, max_width: f32, max_height: f32) -> (f32, f32) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let scale = (max_width / width).min(max_height / height);
    (width * scale, height * scale)
}
