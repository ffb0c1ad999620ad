//! Reconstructed .NET type model consumed by the renderers.
//!
//! This module provides the read-only type graph the literal and attribute renderers work
//! against. Types are produced upstream (from binary metadata) and registered in a
//! [`TypeRegistry`]; once built they are never mutated by rendering.
//!
//! # Key Components
//!
//! - [`CilType`]: A type with its name, flavor, enum member table, constructors and attributes
//! - [`TypeRegistry`]: Central, thread-safe registry for all types
//! - [`TypeBuilder`]: Builder pattern for constructing types
//! - [`CilPrimitiveKind`]: Built-in primitive types (int32, string, object, etc.)
//! - [`TypeNameFormatter`]: Produces scoped display names for types
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use attrscope::metadata::typesystem::{
//!     CilPrimitiveData, CilPrimitiveKind, TypeBuilder, TypeRegistry,
//! };
//!
//! let registry = Arc::new(TypeRegistry::new()?);
//! let color = TypeBuilder::new(registry.clone())
//!     .enum_type("Game", "Color", CilPrimitiveKind::I4)?
//!     .enum_member("Red", CilPrimitiveData::I4(0))?
//!     .enum_member("Green", CilPrimitiveData::I4(1))?
//!     .build()?;
//!
//! assert!(color.is_enum());
//! assert_eq!(color.enum_members.count(), 2);
//! # Ok::<(), attrscope::Error>(())
//! ```

mod base;
mod builder;
mod naming;
mod primitives;
mod registry;

use std::sync::{Arc, OnceLock};

pub use base::{CilFlavor, CilTypeRef, CilTypeRefList};
pub use builder::TypeBuilder;
pub use naming::{CSharpNameFormatter, NamespaceScope, TypeNameFormatter};
pub use primitives::{CilPrimitiveData, CilPrimitiveKind};
pub use registry::TypeRegistry;

use crate::metadata::{
    customattributes::{CustomAttributeUsageList, CustomAttributeUsageRc},
    token::Token,
};

/// Reference to a `CilType`
pub type CilTypeRc = Arc<CilType>;

/// Full name of the base type of every enum
pub const ENUM_BASE_TYPE: &str = "System.Enum";
/// Full name of the marker attribute that turns an enum into a flags enum
pub const FLAGS_ATTRIBUTE: &str = "System.FlagsAttribute";
/// Full name of the attribute restricting where a custom attribute may be applied
pub const ATTRIBUTE_USAGE_ATTRIBUTE: &str = "System.AttributeUsageAttribute";

/// A named constant of an enum type
#[derive(Debug, Clone, PartialEq)]
pub struct CilEnumMember {
    /// Declared member name
    pub name: String,
    /// Underlying value, as stored in metadata
    pub value: CilPrimitiveData,
}

/// A parameter of a [`CilConstructor`]
#[derive(Debug, Clone, PartialEq)]
pub struct CilParameter {
    /// Parameter name
    pub name: String,
    /// Whether the parameter carries a default value and may be omitted by callers
    pub optional: bool,
}

/// A constructor declared by a type
#[derive(Debug, Clone, PartialEq)]
pub struct CilConstructor {
    /// `.cctor` rather than `.ctor`
    pub is_static: bool,
    /// Public visibility
    pub is_public: bool,
    /// Declared parameters in order
    pub params: Vec<CilParameter>,
}

impl CilConstructor {
    /// Public instance constructor with the given parameters
    #[must_use]
    pub fn public(params: Vec<CilParameter>) -> Self {
        CilConstructor {
            is_static: false,
            is_public: true,
            params,
        }
    }

    /// Whether an attribute can be applied through this constructor without passing arguments
    #[must_use]
    pub fn is_callable_without_arguments(&self) -> bool {
        !self.is_static && self.is_public && self.params.iter().all(|param| param.optional)
    }
}

/// Represents a 'Type' of the reconstructed type system.
///
/// The `Token` is the original `TypeDef` token for types recovered from a binary, or an
/// artificial `0xF0` token for primitives and registry-created types.
pub struct CilType {
    /// Token
    pub token: Token,
    /// The `TypeFlavor`
    pub flavor: CilFlavor,
    /// `TypeNamespace` (empty for nested types and the global namespace)
    pub namespace: String,
    /// `TypeName`, including a generic arity suffix (`List`1`) where present
    pub name: String,
    /// This types base aka 'extends'; the element type for arrays and pointers, the generic
    /// definition for generic instances
    base: OnceLock<CilTypeRc>,
    /// The type this type is nested in
    enclosing: OnceLock<CilTypeRc>,
    /// The underlying integer type of an enum
    underlying: OnceLock<CilTypeRc>,
    /// All generic arguments this type has (instantiated version), held weakly
    pub generic_args: CilTypeRefList,
    /// Declared enum constants in declaration order
    pub enum_members: Arc<boxcar::Vec<CilEnumMember>>,
    /// Declared constructors
    pub constructors: Arc<boxcar::Vec<CilConstructor>>,
    /// All custom attributes this type has
    pub custom_attributes: CustomAttributeUsageList,
}

impl CilType {
    /// Create a new instance of a `CilType`
    pub fn new(
        token: Token,
        flavor: CilFlavor,
        namespace: String,
        name: String,
        base: Option<&CilTypeRc>,
    ) -> Self {
        let base_lock = OnceLock::new();
        if let Some(base_value) = base {
            base_lock.set(base_value.clone()).ok();
        }

        CilType {
            token,
            flavor,
            namespace,
            name,
            base: base_lock,
            enclosing: OnceLock::new(),
            underlying: OnceLock::new(),
            generic_args: Arc::new(boxcar::Vec::new()),
            enum_members: Arc::new(boxcar::Vec::new()),
            constructors: Arc::new(boxcar::Vec::new()),
            custom_attributes: Arc::new(boxcar::Vec::new()),
        }
    }

    /// Access the base type of this type, if it exists
    pub fn base(&self) -> Option<CilTypeRc> {
        self.base.get().cloned()
    }

    /// Set the base type, can only be done once
    ///
    /// # Errors
    /// Returns an error if the base type has already been set.
    pub fn set_base(&self, base: &CilTypeRc) -> crate::Result<()> {
        self.base
            .set(base.clone())
            .map_err(|_| malformed_error!("Base type of {} already set", self.fullname()))
    }

    /// The type this type is nested in, if any
    pub fn enclosing(&self) -> Option<CilTypeRc> {
        self.enclosing.get().cloned()
    }

    /// Set the enclosing type, can only be done once
    ///
    /// # Errors
    /// Returns an error if the enclosing type has already been set.
    pub fn set_enclosing(&self, enclosing: &CilTypeRc) -> crate::Result<()> {
        self.enclosing
            .set(enclosing.clone())
            .map_err(|_| malformed_error!("Enclosing type of {} already set", self.fullname()))
    }

    /// The underlying integer type of an enum, if one was recorded
    pub fn enum_underlying(&self) -> Option<CilTypeRc> {
        self.underlying.get().cloned()
    }

    /// Set the underlying type of an enum, can only be done once
    ///
    /// # Errors
    /// Returns an error if the underlying type has already been set.
    pub fn set_enum_underlying(&self, underlying: &CilTypeRc) -> crate::Result<()> {
        self.underlying
            .set(underlying.clone())
            .map_err(|_| malformed_error!("Underlying type of {} already set", self.fullname()))
    }

    /// The element type of an array or pointer type
    pub fn element_type(&self) -> Option<CilTypeRc> {
        match self.flavor {
            CilFlavor::Array { .. } | CilFlavor::Pointer => self.base(),
            _ => None,
        }
    }

    /// Returns the full name (Namespace.Name) of the entity. Nested types are joined to
    /// their enclosing type with `+`.
    pub fn fullname(&self) -> String {
        if let Some(enclosing) = self.enclosing() {
            format!("{}+{}", enclosing.fullname(), self.name)
        } else if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{0}.{1}", self.namespace, self.name)
        }
    }

    /// Whether this type derives from `System.Enum`
    pub fn is_enum(&self) -> bool {
        self.base()
            .is_some_and(|parent| parent.fullname() == ENUM_BASE_TYPE)
    }

    /// Whether instances of this type are values (structs, enums and primitive values).
    /// A generic instance is a value type when its generic definition is one.
    pub fn is_value_type(&self) -> bool {
        match self.flavor {
            CilFlavor::GenericInstance => self.base().is_some_and(|def| def.is_value_type()),
            _ => self.flavor.is_value_type() || self.is_enum(),
        }
    }

    /// Whether this type is an unbound generic type or method parameter
    pub fn is_generic_parameter(&self) -> bool {
        matches!(self.flavor, CilFlavor::GenericParameter { .. })
    }

    /// Whether this is an array type
    pub fn is_array(&self) -> bool {
        matches!(self.flavor, CilFlavor::Array { .. })
    }

    /// Whether an attribute with the given full name is applied to this type
    pub fn has_attribute(&self, fullname: &str) -> bool {
        self.custom_attributes
            .iter()
            .any(|(_, usage)| usage.attribute_type().fullname() == fullname)
    }

    /// Whether this enum is marked with `[Flags]`
    pub fn is_flags(&self) -> bool {
        self.has_attribute(FLAGS_ATTRIBUTE)
    }

    /// Whether any constructor can be invoked without arguments (none, or all optional)
    pub fn has_default_constructor(&self) -> bool {
        self.constructors
            .iter()
            .any(|(_, ctor)| ctor.is_callable_without_arguments())
    }

    /// Look up the first member whose value numerically equals `value`
    pub fn enum_member_by_value(&self, value: &CilPrimitiveData) -> Option<String> {
        self.enum_members
            .iter()
            .find(|(_, member)| member.value.value_eq(value))
            .map(|(_, member)| member.name.clone())
    }

    /// Attach a custom attribute usage to this type
    pub fn add_custom_attribute(&self, usage: CustomAttributeUsageRc) {
        self.custom_attributes.push(usage);
    }
}

impl std::fmt::Debug for CilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CilType")
            .field("token", &self.token)
            .field("flavor", &self.flavor)
            .field("fullname", &self.fullname())
            .finish_non_exhaustive()
    }
}
