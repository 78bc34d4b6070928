//! Form input rendering shared by the designer and runtime views

mod field_renderer;

pub use field_renderer::{draw_field, draw_field_with_value};
