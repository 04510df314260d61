//! Thin arithmetic over the thread-local CSPRNG
//!
//! Every helper has a `*_with` form taking an explicit `Rng`, so callers can
//! plug in a seeded generator.

#![forbid(unsafe_code)]

mod error;

pub use error::{RandomError, Result};

use rand::distr::uniform::SampleUniform;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, RngCore};
use std::fmt::Display;

mod sealed {
    pub trait Sealed {}
}

/// Primitive integer types accepted by [`randint`]
pub trait Integer: sealed::Sealed + SampleUniform + PartialOrd + Copy + Display {}

macro_rules! impl_integer {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}
            impl Integer for $t {}
        )*
    };
}

// rand has no uniform sampler for `isize`
impl_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, usize);

/// Uniform integer in `[min, max)`
///
/// # Errors
///
/// Returns `RandomError::EmptyRange` when `min >= max`.
pub fn randint<T: Integer>(min: T, max: T) -> Result<T> {
    randint_with(&mut rand::rng(), min, max)
}

/// [`randint`] with a caller-supplied generator
///
/// # Errors
///
/// Returns `RandomError::EmptyRange` when `min >= max`.
pub fn randint_with<T: Integer, R: Rng + ?Sized>(rng: &mut R, min: T, max: T) -> Result<T> {
    if min >= max {
        return Err(RandomError::EmptyRange {
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(rng.random_range(min..max))
}

/// Uniform float in `[min, max)`
///
/// # Errors
///
/// Returns `RandomError::NonFinite` for NaN or infinite bounds (or a width
/// that overflows) and
/// `RandomError::EmptyRange` when `min >= max`.
pub fn uniform(min: f64, max: f64) -> Result<f64> {
    uniform_with(&mut rand::rng(), min, max)
}

/// [`uniform`] with a caller-supplied generator
///
/// # Errors
///
/// Same as [`uniform`].
pub fn uniform_with<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> Result<f64> {
    // max - min must be finite as well
    if !min.is_finite() || !max.is_finite() || !(max - min).is_finite() {
        return Err(RandomError::NonFinite);
    }
    if min >= max {
        return Err(RandomError::EmptyRange {
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(rng.random_range(min..max))
}

/// Uniformly chosen element, `None` for an empty slice
#[must_use]
pub fn choice<T>(items: &[T]) -> Option<&T> {
    choice_with(&mut rand::rng(), items)
}

/// [`choice`] with a caller-supplied generator
pub fn choice_with<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    items.choose(rng)
}

/// `len` bytes from the CSPRNG
#[must_use]
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    rand::rng().fill_bytes(&mut bytes);
    tracing::trace!(len, "generated random bytes");
    bytes
}

/// Shuffle `items` in place (Fisher-Yates)
pub fn shuffle<T>(items: &mut [T]) {
    shuffle_with(&mut rand::rng(), items);
}

/// [`shuffle`] with a caller-supplied generator
pub fn shuffle_with<T, R: Rng + ?Sized>(rng: &mut R, items: &mut [T]) {
    items.shuffle(rng);
}
