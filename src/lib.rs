mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use controllers::cli::snapshot::SnapshotController;
pub use controllers::interactive::{ControllerError, InputEvent, InteractionController, Redraw};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::draw_overlay::draw_overlay;
pub use crate::core::actions::render_field::render_field;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::explorer_config::{ExplorerConfig, ExplorerConfigError};
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::pixel_rect::PixelRect;
pub use crate::core::data::point::Point;
pub use crate::core::data::view_state::{Axis, Selection, ViewState};
pub use crate::core::fractals::mandelbrot::algorithm::escape_time;
pub use crate::core::fractals::mandelbrot::orbit::{Orbit, generate_orbit};
pub use crate::core::util::coordinate_mapper::{complex_to_point, point_to_complex, to_pixel, to_plane};
pub use adapters::pixel_format::{PixelFormatError, copy_rgb_to_rgba};
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
