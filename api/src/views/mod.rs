//! Views
//!
//! Renders journal pages to HTML.

pub mod renderer;

pub use renderer::{render_entry, render_home, render_new_entry_form};
