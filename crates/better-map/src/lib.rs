#![doc = include_str!("../README.md")]

mod config;
mod error;

/// The map type and its storage primitives.
pub mod map;

/// Index-based access: `at`, `first`, `last`, `slice`, `shift`.
pub mod position;

/// Closure-driven queries and transforms.
pub mod functional;

/// Random sampling and ordering.
pub mod sample;

/// Combining several maps by key.
pub mod combine;

/// Flat-record JSON view.
pub mod json;

pub use config::{Config, DEFAULT_NAME};
pub use error::Error;
pub use map::BetterMap;

pub(crate) mod prelude_internal {
    #![allow(unused_imports)]
    pub use crate::config::{Config, DEFAULT_NAME};
    pub use crate::error::Error;
    pub use crate::map::BetterMap;
    pub use core::hash::Hash;
    pub use tracing::{debug, trace};
}
