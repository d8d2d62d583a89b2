//! Widget styles with shadows and rounded corners.

mod buttons;
mod containers;
mod inputs;
pub mod palette;
mod shadows;

pub use buttons::{primary_button_style, tab_button_selected_style, tab_button_style};
pub use containers::{card_style, page_style, tab_bar_style};
pub use inputs::field_input_style;
