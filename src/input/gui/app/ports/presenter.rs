use egui::Context as EguiContext;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;

pub trait GuiPresenterPort {
    /// Replaces the framebuffer contents with `frame`.
    fn show_frame(&mut self, frame: &PixelBuffer);
    /// Maps a physical window position onto the field, `None` when outside.
    fn field_position(&self, window_position: (f32, f32)) -> Option<Point>;
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error>;
    fn resize(&mut self, width: u32, height: u32);
}
