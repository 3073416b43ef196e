//! Configuration sources, in increasing precedence.

pub mod environment;
pub mod workspace_file;
