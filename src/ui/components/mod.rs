//! Reusable UI components.

pub mod input_field;
pub mod link_row;

pub use input_field::{render_input_field, InputFieldConfig, INPUT_FIELD_HEIGHT};
pub use link_row::{link_row_line, LinkRowConfig};
