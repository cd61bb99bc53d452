pub mod clock;
pub mod contacts;
pub mod input;
pub mod paint_surface;
pub mod render;
pub mod settings;
pub mod style_config;

pub type Point2D = (f32, f32);
