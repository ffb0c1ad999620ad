//! The reconstructed type model consumed by the renderers.
//!
//! Everything in here is produced upstream, before rendering starts, and is read-only from the
//! point of view of [`crate::render`].
//!
//! # Key Components
//!
//! - [`token`] - Handles identifying registered types
//! - [`typesystem`] - Types, the registry, the builder and scoped name formatting
//! - [`customattributes`] - Recovered values and attribute usages

pub mod customattributes;
pub mod token;
pub mod typesystem;
