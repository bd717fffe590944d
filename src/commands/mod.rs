// src/commands/mod.rs

//! Subcommand handlers. Each is a thin dispatcher into the execution core.

pub mod clean;
pub mod fpull;
pub mod open;
pub mod pkg;
pub mod scaffold;
pub mod setup;
pub mod subscribe;
pub mod videos;
