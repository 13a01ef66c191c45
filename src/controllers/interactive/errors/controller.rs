use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::GeneratePixelBufferError;
use crate::core::data::explorer_config::ExplorerConfigError;
use std::{error::Error, fmt};

#[derive(Debug)]
pub enum ControllerError {
    Config(ExplorerConfigError),
    Render(GeneratePixelBufferError),
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid explorer config: {}", err),
            Self::Render(err) => write!(f, "failed to render field: {}", err),
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

impl From<ExplorerConfigError> for ControllerError {
    fn from(err: ExplorerConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<GeneratePixelBufferError> for ControllerError {
    fn from(err: GeneratePixelBufferError) -> Self {
        Self::Render(err)
    }
}
