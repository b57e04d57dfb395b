//! Terminal front-end for the `sitesearch` result list.
//!
//! The [`App`] draws the controller's view with ratatui, feeds key presses
//! through the controller's navigation operations, and completes the deferred
//! scroll against the drawn list after every frame.

mod app;
pub mod components;
pub mod keymap;
mod runtime;
pub mod style;
pub mod viewport;

pub use app::App;
pub use style::Theme;
