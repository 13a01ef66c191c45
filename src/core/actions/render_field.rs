use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotHsbRainbow;
use log::trace;

/// Recomputes the whole field for `view` from scratch.
pub fn render_field(view: &ViewState) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let pixel_rect = view.field_rect();
    let algorithm = MandelbrotAlgorithm::new(view);
    let Ok(escape_times) = generate_fractal(pixel_rect, &algorithm);
    let colour_map = MandelbrotHsbRainbow::new(view.max_iterations());
    trace!(
        "colouring {} escape times with {}",
        escape_times.len(),
        colour_map.display_name()
    );

    generate_pixel_buffer(escape_times, &colour_map, pixel_rect)
}
