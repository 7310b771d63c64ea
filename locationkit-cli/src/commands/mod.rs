//! CLI subcommands.

pub mod common;
pub mod config;
pub mod keys;
pub mod position;
pub mod route;
pub mod search;
pub mod tile;
