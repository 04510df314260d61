//! Fluent hashing API
//!
//! Actions take data as arguments:
//! `Hash::sha256().with_key(key).compute(data).await`

pub mod hash_builder;
pub mod hash_entry;

pub use hash_builder::{HashBuilder, HashBuilderWithHandler};
pub use hash_entry::Hash;
