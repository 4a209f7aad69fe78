//! CLI command handlers
//!
//! Each handler works against the current directory, reads `cxmake.toml`
//! when it needs a project, and reports progress on the terminal.

pub mod build;
pub mod clean;
pub mod info;
pub mod init;

pub use build::{build, generate};
pub use clean::clean;
pub use info::info;
pub use init::init;
