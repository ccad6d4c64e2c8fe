//! Library components of the `painel` command-line tool.

pub mod config;
pub mod logging;
pub mod pipeline;
