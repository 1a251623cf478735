//! Terminal user interface.
//!
//! - `loop_runner` - main event loop and terminal management
//! - `input` - keyboard dispatch through the keybinding registry
//! - `render` - frame layout and per-screen dispatch
//! - `header`, `tabs`, `status` - fixed chrome around the content area
//! - `articles`, `categories`, `magazine`, `account` - tab screens
//! - `reader` - long-form article reader
//! - `help` - keybinding overlay

mod account;
mod articles;
mod categories;
mod header;
mod help;
mod input;
mod loop_runner;
mod magazine;
pub mod reader;
mod render;
mod status;
mod tabs;

pub use loop_runner::{run, Action};
pub use render::render;
