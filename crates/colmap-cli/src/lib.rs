//! Library components of the `colmap` command-line tool.

pub mod headers;
pub mod logging;
pub mod render;
