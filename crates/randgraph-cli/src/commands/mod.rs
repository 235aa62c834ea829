//! Command implementations for the randgraph CLI.

pub mod check;
pub mod config;
pub mod generate;
pub mod report;
pub mod view;
