pub mod input;
pub mod redraw;
