//! Error types for the scrivano article generator.
//!
//! This crate provides the foundation error types used throughout the scrivano
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use scrivano_error::{ScrivanoResult, BackendError, BackendErrorKind};
//!
//! fn call_model() -> ScrivanoResult<String> {
//!     Err(BackendError::new(BackendErrorKind::Http("Connection refused".to_string())))?
//! }
//!
//! match call_model() {
//!     Ok(text) => println!("Got: {}", text),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod config;
mod error;
mod pipeline;
mod store;

pub use backend::{BackendError, BackendErrorKind};
pub use config::ConfigError;
pub use error::{ScrivanoError, ScrivanoErrorKind, ScrivanoResult};
pub use pipeline::{PipelineError, PipelineErrorKind};
pub use store::{StoreError, StoreErrorKind};
