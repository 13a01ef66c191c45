use winit::window::Window;

use crate::core::data::pixel_rect::PixelRect;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    fn build(&self, window: &'static Window, field_rect: PixelRect) -> Result<T, pixels::Error>;
}
