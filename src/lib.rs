//! # cxmake - CMake project generator and build driver
//!
//! cxmake describes a single C++ executable, writes the matching
//! `CMakeLists.txt`, and drives CMake and make to build it.
//!
//! ## Quick Start
//!
//! ```bash
//! # Create a manifest
//! cxm init myapp
//!
//! # Generate CMakeLists.txt, configure, and compile
//! cxm build --profile release
//! ```
//!
//! ## Module Organization
//!
//! - [`project`] - The project descriptor and its builder
//! - [`emit`] - CMakeLists.txt rendering
//! - [`runner`] - Configure/compile process orchestration
//! - [`config`] - Manifest parsing (`cxmake.toml`)
//! - [`commands`] - CLI command handlers

/// CLI command handlers.
pub mod commands;

/// Manifest parsing (`cxmake.toml`).
pub mod config;

/// CMakeLists.txt generation.
pub mod emit;

/// Error types.
pub mod error;

/// Project model.
pub mod project;

/// Toolchain invocation.
pub mod runner;

pub use emit::{emit, render};
pub use error::{EmitError, Phase, ProcessFailure, RunError};
pub use project::{ProjectBuilder, ProjectDescriptor, ProjectOptions};
pub use runner::{ProcessExecutor, ToolchainRunner};
