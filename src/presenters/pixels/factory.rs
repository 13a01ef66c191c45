use winit::window::Window;

use crate::core::data::pixel_rect::PixelRect;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::presenters::pixels::presenter::PixelsPresenter;

#[derive(Debug, Default)]
pub struct PixelsPresenterFactory {}

impl PixelsPresenterFactory {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl GuiPresenterFactoryPort<PixelsPresenter> for PixelsPresenterFactory {
    fn build(
        &self,
        window: &'static Window,
        field_rect: PixelRect,
    ) -> Result<PixelsPresenter, pixels::Error> {
        PixelsPresenter::new(window, field_rect)
    }
}
