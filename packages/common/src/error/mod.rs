//! Error handling with context propagation
//!
//! Provides a unified error used at crate boundaries:
//! - Error chaining and context preservation
//! - Backtrace capture (behind the `full-backtrace` feature)
//! - Structured error kinds with thiserror

pub mod constructors;
pub mod display;
pub mod extensions;
pub mod logging;
pub mod types;

pub use extensions::{OptionExt, ResultExt};
pub use logging::LoggingTransformer;
pub use types::{Error, ErrorKind, Result};
