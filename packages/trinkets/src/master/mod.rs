//! Master builders: one entry point that hands out the per-topic builders

pub mod core;
pub mod hash;
#[cfg(feature = "token")]
pub mod token;

pub use self::core::Trinkets;
pub use hash::HashMasterBuilder;

#[cfg(feature = "token")]
pub use token::TokenMasterBuilder;
