//! CLI subcommand implementations.

pub mod common;
pub mod export;
pub mod modes;
pub mod presets;
pub mod response;
pub mod waves;
