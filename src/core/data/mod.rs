pub mod colour;
pub mod complex;
pub mod explorer_config;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod point;
pub mod view_state;
