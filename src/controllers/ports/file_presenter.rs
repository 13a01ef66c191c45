use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Somewhere a finished frame can be written to disk.
pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
