//! Interactive command dispatcher
//!
//! The menu is pure I/O glue around `PersonRegistry`: it reads choices and
//! tokens, calls the registry and renders structured results as text or JSON.

pub mod input;
pub mod menu;
pub mod render;

pub use input::TokenReader;
pub use menu::{Menu, MenuChoice, UNKNOWN_PARENT};
pub use render::OutputFormat;
