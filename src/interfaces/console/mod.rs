//! Console interface
//!
//! Input collection and the interactive shell. Everything here is
//! presentation: the core services return structured receipts and
//! errors, and this layer renders them.

pub mod input;
pub mod shell;

pub use input::{ConsoleInput, InputSource, MenuAction};
pub use shell::ConsoleShell;
