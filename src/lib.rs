pub mod commands;
pub mod common;
pub mod config;
pub mod logging;

pub use common::errors::TextKitError;
pub use common::range::{merge_ranges, Adjacency, Range};
