//! Color minification for CSS declarations.

mod color_names;

pub mod color;
pub mod declarations;

pub use color::canonicalize_color;
pub use declarations::{is_color_property, process_declarations, COLOR_PROPERTIES};

#[cfg(test)]
mod tests_color_properties;
