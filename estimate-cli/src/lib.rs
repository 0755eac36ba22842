//! Command handlers and session persistence for the estimate CLI.
//!
//! The binary in `main.rs` only parses arguments and dispatches here, so
//! every behaviour is reachable from tests without spawning a process.

pub mod commands;
pub mod render;
pub mod store;
