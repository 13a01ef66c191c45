pub mod controller;
pub mod input_event;
