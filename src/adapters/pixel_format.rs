//! Pixel format conversion helpers for presentation adapters.

use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelFormatError {
    SourceNotRgb { len: usize },
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for PixelFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceNotRgb { len } => {
                write!(f, "source length {} is not a multiple of 3", len)
            }
            Self::SizeMismatch { expected, actual } => write!(
                f,
                "destination length {} does not match expected {}",
                actual, expected
            ),
        }
    }
}

impl Error for PixelFormatError {}

/// Copies RGB pixel data to RGBA format, setting alpha to 255.
///
/// `dst` must hold exactly four bytes for every three in `src`; nothing is
/// written otherwise.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), PixelFormatError> {
    if src.len() % 3 != 0 {
        return Err(PixelFormatError::SourceNotRgb { len: src.len() });
    }

    let expected = (src.len() / 3) * 4;

    if dst.len() != expected {
        return Err(PixelFormatError::SizeMismatch {
            expected,
            actual: dst.len(),
        });
    }

    for (src_pixel, dst_pixel) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        dst_pixel[..3].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }

    Ok(())
}
