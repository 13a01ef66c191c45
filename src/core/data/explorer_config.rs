use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use std::error::Error;
use std::fmt;

pub const DEFAULT_WIDTH: u32 = 1600;
pub const DEFAULT_HEIGHT: u32 = 900;
pub const DEFAULT_ZOOM: u32 = 100;
pub const DEFAULT_MAX_ITERATIONS: u32 = 1;
pub const DEFAULT_MARKER_SIZE: u32 = 10;
pub const DEFAULT_ZOOM_IN_STEP: u32 = 100;
pub const DEFAULT_ZOOM_OUT_STEP: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplorerConfigError {
    InvalidField(PixelRectError),
    ZeroZoom,
    ZeroMaxIterations,
    ZeroZoomStep,
    ZeroMarkerSize,
}

impl fmt::Display for ExplorerConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidField(err) => write!(f, "invalid field size: {}", err),
            Self::ZeroZoom => write!(f, "zoom must be at least one pixel per unit"),
            Self::ZeroMaxIterations => write!(f, "Maximum iterations must be greater than zero"),
            Self::ZeroZoomStep => write!(f, "zoom steps must be greater than zero"),
            Self::ZeroMarkerSize => write!(f, "marker size must be greater than zero"),
        }
    }
}

impl Error for ExplorerConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidField(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PixelRectError> for ExplorerConfigError {
    fn from(err: PixelRectError) -> Self {
        Self::InvalidField(err)
    }
}

/// Startup parameters for an exploring session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplorerConfig {
    pub width: u32,
    pub height: u32,
    /// Pixels per plane unit.
    pub zoom: u32,
    pub max_iterations: u32,
    /// Side of the square used to hit-test and draw the markers.
    pub marker_size: u32,
    pub zoom_in_step: u32,
    pub zoom_out_step: u32,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            zoom: DEFAULT_ZOOM,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            marker_size: DEFAULT_MARKER_SIZE,
            zoom_in_step: DEFAULT_ZOOM_IN_STEP,
            zoom_out_step: DEFAULT_ZOOM_OUT_STEP,
        }
    }
}

impl ExplorerConfig {
    /// Checks every field and returns the bounds of the pixel field.
    pub fn validate(&self) -> Result<PixelRect, ExplorerConfigError> {
        let field_rect = PixelRect::from_size(self.width, self.height)?;

        if self.zoom == 0 {
            return Err(ExplorerConfigError::ZeroZoom);
        }

        if self.max_iterations == 0 {
            return Err(ExplorerConfigError::ZeroMaxIterations);
        }

        if self.zoom_in_step == 0 || self.zoom_out_step == 0 {
            return Err(ExplorerConfigError::ZeroZoomStep);
        }

        if self.marker_size == 0 {
            return Err(ExplorerConfigError::ZeroMarkerSize);
        }

        Ok(field_rect)
    }
}
