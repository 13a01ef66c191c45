//! Interactive controller for exploring the Mandelbrot set.
//!
//! Turns pointer and keyboard input into changes of the view and keeps the
//! field and orbit in sync with it. Shells pull the results and repaint
//! according to the returned [`Redraw`].

mod controller;
pub mod errors;
pub mod events;

pub use controller::InteractionController;
pub use errors::controller::ControllerError;
pub use events::input::InputEvent;
pub use events::redraw::Redraw;
