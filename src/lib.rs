//! magstand: a terminal browser for a small magazine and article catalog.
//!
//! The catalog is read-only fixture data. All user state lives in a
//! [`session::Session`] owned by the running [`app::App`].

pub mod app;
pub mod catalog;
pub mod config;
pub mod content;
pub mod keybindings;
pub mod nav;
pub mod session;
pub mod theme;
pub mod ui;
pub mod util;
