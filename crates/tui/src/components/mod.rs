//! Widgets that draw the dropdown view.

mod dropdown;
mod title;

pub use dropdown::{DropdownLayout, render_dropdown};
pub use title::title_line;
