//! C# source text for recovered values and attribute usages.
//!
//! This module is the "unparse" half of the crate: it turns pieces of the reconstructed type
//! graph into text a human reads as equivalent C# source, and that can be kept compilable on
//! request.
//!
//! # Key Components
//!
//! - [`LiteralRenderer`]: Renders a single typed value as a literal
//! - [`AttributeRenderer`]: Renders attribute usages as `[Name(...)]` annotations
//! - [`escape_string`] / [`to_identifier`]: Escaping for string literals and identifiers
//! - [`format_address`]: Fixed-width hexadecimal address tokens
//! - [`RenderConfig`] / [`AttributeRenderOptions`]: Configuration
//!
//! Rendering never mutates its inputs and keeps no state between calls, so a renderer can be
//! shared freely between threads.

mod address;
mod attribute;
mod config;
mod escape;
mod literal;

pub use address::{format_address, format_address_range, format_signed_address};
pub use attribute::AttributeRenderer;
pub use config::{
    AttributeLayout, AttributeRenderFlags, AttributeRenderOptions, RenderConfig,
    DEFAULT_MAX_DEPTH,
};
pub use escape::{canonical_escape, escape_string, is_printable_ascii, to_identifier, ESCAPE_TABLE};
pub use literal::LiteralRenderer;
