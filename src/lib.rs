// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # attrscope
//!
//! Renders values and custom attribute usages recovered from compiled .NET / IL2CPP binaries
//! as C# source text.
//!
//! Decompilers and metadata dumpers recover a type graph together with the constants stored
//! in it: attribute constructor arguments, field and property assignments, enum values.
//! `attrscope` is the "unparse" half of such a pipeline. Given the reconstructed types and a
//! value, it produces text a human reads as equivalent source code and that, on request, stays
//! compilable.
//!
//! ## Features
//!
//! - **Closed value model** - Every value kind is a variant of one enum, matched exhaustively
//! - **Faithful literals** - Escaped strings and chars, `1F / 0F` style float specials, arrays
//! - **Enum reconstruction** - Member lookup by value, `[Flags]` decomposition with correct
//!   signed/unsigned widening
//! - **Two attribute shapes** - Full constructor invocations and type-only legacy records
//! - **Compilable output** - Optional commenting-out of annotations that cannot be applied
//! - **Parallel rendering** - Large attribute tables are rendered with `rayon`
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use attrscope::prelude::*;
//!
//! let registry = Arc::new(TypeRegistry::new()?);
//! let access = TypeBuilder::new(registry.clone())
//!     .enum_type("Game", "Access", CilPrimitiveKind::I4)?
//!     .enum_member("Read", CilPrimitiveData::I4(1))?
//!     .enum_member("Write", CilPrimitiveData::I4(2))?
//!     .flags()?
//!     .build()?;
//!
//! let renderer = LiteralRenderer::new(CSharpNameFormatter::new(), RenderConfig::default());
//! let value = CustomAttributeArgument::Enum(access.clone(), CilPrimitiveData::I4(3));
//! let text = renderer.render(&value, &access, &NamespaceScope::new("Game"))?;
//! assert_eq!(text, "Access.Read | Access.Write");
//! # Ok::<(), attrscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`metadata`] - The read-only type model: tokens, types, the registry, name formatting
//!   and the recovered attribute usages
//! - [`render`] - Escaping, address formatting, literal and attribute rendering
//!
//! ## Error Handling
//!
//! All operations return [`Result<T>`] with the crate's [`Error`] type. Rendering is pure,
//! so every failure is reported to the immediate caller and retrying cannot change it.
//!
//! ## Logging
//!
//! `attrscope` logs through the [`log`](https://docs.rs/log) facade and never installs a
//! logger. Commented-out annotations and enum values rendered as casts are logged at `debug`,
//! every rendered annotation at `trace`.

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use attrscope::prelude::*;
///
/// let registry = TypeRegistry::new()?;
/// let int_type = registry.get_primitive(CilPrimitiveKind::I4)?;
/// let renderer = LiteralRenderer::new(CSharpNameFormatter::new(), RenderConfig::default());
/// let value = CustomAttributeArgument::I4(5);
/// let text = renderer.render(&value, &int_type, &NamespaceScope::default())?;
/// assert_eq!(text, "5");
/// # Ok::<(), attrscope::Error>(())
/// ```
pub mod prelude;

/// The reconstructed type model and the recovered attribute usages
pub mod metadata;

/// C# source rendering of values and attribute usages
pub mod render;

/// `attrscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `attrscope` Error type
///
/// # Examples
///
/// ```rust
/// use attrscope::{prelude::*, Error};
///
/// let registry = TypeRegistry::new()?;
/// let int_type = registry.get_primitive(CilPrimitiveKind::I4)?;
/// let renderer = LiteralRenderer::new(CSharpNameFormatter::new(), RenderConfig::default());
/// let array = CustomAttributeArgument::Array(vec![]);
///
/// match renderer.render(&array, &int_type, &NamespaceScope::default()) {
///     Err(Error::ValueTypeMismatch(message)) => println!("Mismatch: {message}"),
///     Err(e) => println!("Error: {e}"),
///     Ok(text) => println!("{text}"),
/// }
/// # Ok::<(), attrscope::Error>(())
/// ```
pub use error::Error;
