//! # attrscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the attrscope library.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all attrscope operations
pub use crate::Error;

/// The result type used throughout attrscope
pub use crate::Result;

// ================================================================================================
// Type Model
// ================================================================================================

/// Handle of a registered type
pub use crate::metadata::token::Token;

/// Types, their classification and payloads
pub use crate::metadata::typesystem::{
    CilConstructor, CilFlavor, CilParameter, CilPrimitiveData, CilPrimitiveKind, CilType,
    CilTypeRc,
};

/// Registry and construction of types
pub use crate::metadata::typesystem::{TypeBuilder, TypeRegistry};

/// Scoped type names
pub use crate::metadata::typesystem::{CSharpNameFormatter, NamespaceScope, TypeNameFormatter};

// ================================================================================================
// Recovered Values and Attributes
// ================================================================================================

/// Values and attribute usages
pub use crate::metadata::customattributes::{
    CustomAttributeArgument, CustomAttributeInvocation, CustomAttributeNamedArgument,
    CustomAttributeTypeOnly, CustomAttributeTypedArgument, CustomAttributeUsage,
    CustomAttributeValue, VirtualAddressRange,
};

// ================================================================================================
// Rendering
// ================================================================================================

/// Renderers
pub use crate::render::{AttributeRenderer, LiteralRenderer};

/// Rendering configuration
pub use crate::render::{
    AttributeLayout, AttributeRenderFlags, AttributeRenderOptions, RenderConfig,
};
