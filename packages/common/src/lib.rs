//! Common infrastructure shared by the trinkets crates
//!
//! This crate provides:
//! - A unified, cloneable error with kind, context and source propagation
//! - `env_logger` bootstrap and redacting log helpers

#![forbid(unsafe_code)]

pub mod error;
#[doc(hidden)]
pub mod macros;

pub use error::*;
