//! Input adapters: command-line arguments and, with the `gui` feature, an
//! interactive window.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
