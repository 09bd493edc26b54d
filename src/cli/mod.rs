//! CLI command implementations and the interactive menu.

pub mod commands;
pub mod menu;
