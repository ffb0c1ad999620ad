//! CustomAttribute-specific types and data structures.
//!
//! This module contains all the types used for representing recovered custom attribute data:
//! typed argument values, named field/property assignments, the constructor invocation, and
//! the two shapes an attribute usage can be recovered in.

use std::sync::Arc;

use crate::metadata::typesystem::{CilPrimitiveData, CilTypeRc};

/// A reference-counted pointer to a `CustomAttributeUsage`
pub type CustomAttributeUsageRc = Arc<CustomAttributeUsage>;
/// A vector that holds a list of `CustomAttributeUsage` instances for storage on parent objects
pub type CustomAttributeUsageList = Arc<boxcar::Vec<CustomAttributeUsageRc>>;

/// Represents a single value recovered from metadata.
///
/// Exactly one kind is active. Values are always rendered together with the type they were
/// declared as (see [`CustomAttributeTypedArgument`]); the kind must be consistent with it.
#[derive(Debug, Clone)]
pub enum CustomAttributeArgument {
    /// No value (`null` for references, `default` for value types and generic parameters)
    Null,
    /// Boolean value
    Bool(bool),
    /// Character value (16-bit Unicode)
    Char(char),
    /// Signed 8-bit integer
    I1(i8),
    /// Unsigned 8-bit integer
    U1(u8),
    /// Signed 16-bit integer
    I2(i16),
    /// Unsigned 16-bit integer
    U2(u16),
    /// Signed 32-bit integer
    I4(i32),
    /// Unsigned 32-bit integer
    U4(u32),
    /// Signed 64-bit integer
    I8(i64),
    /// Unsigned 64-bit integer
    U8(u64),
    /// 32-bit floating point
    R4(f32),
    /// 64-bit floating point
    R8(f64),
    /// String value
    String(String),
    /// Type reference (a `typeof` value)
    Type(CilTypeRc),
    /// Array of values, all of the declared array's element type
    Array(Vec<CustomAttributeArgument>),
    /// Enum value: the enum type together with its integer payload
    Enum(CilTypeRc, CilPrimitiveData),
}

/// A value paired with the type it was declared as
#[derive(Debug, Clone)]
pub struct CustomAttributeTypedArgument {
    /// Declared type of the argument (the constructor parameter type)
    pub arg_type: CilTypeRc,
    /// Value of the argument
    pub value: CustomAttributeArgument,
}

/// Represents a named argument (field or property) in a custom attribute
#[derive(Debug, Clone)]
pub struct CustomAttributeNamedArgument {
    /// Whether this is a field (true) or property (false)
    pub is_field: bool,
    /// Name of the field or property
    pub name: String,
    /// Type of the argument
    pub arg_type: CilTypeRc,
    /// Value of the argument
    pub value: CustomAttributeArgument,
}

/// The recovered constructor invocation of one attribute usage
#[derive(Debug, Clone, Default)]
pub struct CustomAttributeValue {
    /// Positional arguments of the constructor call
    pub fixed_args: Vec<CustomAttributeTypedArgument>,
    /// Named arguments (fields and properties), each kind in recovered order
    pub named_args: Vec<CustomAttributeNamedArgument>,
}

impl CustomAttributeValue {
    /// Field assignments in recovered order
    pub fn fields(&self) -> impl Iterator<Item = &CustomAttributeNamedArgument> {
        self.named_args.iter().filter(|arg| arg.is_field)
    }

    /// Property assignments in recovered order
    pub fn properties(&self) -> impl Iterator<Item = &CustomAttributeNamedArgument> {
        self.named_args.iter().filter(|arg| !arg.is_field)
    }

    /// Total number of positional and named arguments
    #[must_use]
    pub fn argument_count(&self) -> usize {
        self.fixed_args.len() + self.named_args.len()
    }
}

/// Location of the attribute generator function in the binary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VirtualAddressRange {
    /// First address
    pub start: u64,
    /// End address
    pub end: u64,
}

impl VirtualAddressRange {
    /// Create a new range
    #[must_use]
    pub fn new(start: u64, end: u64) -> Self {
        VirtualAddressRange { start, end }
    }
}

/// An attribute usage whose constructor call was recovered in full
#[derive(Debug, Clone)]
pub struct CustomAttributeInvocation {
    /// The type declaring the invoked constructor, i.e. the attribute type
    pub attribute_type: CilTypeRc,
    /// Constructor arguments and named assignments
    pub value: CustomAttributeValue,
}

/// An attribute usage of which only the attribute type is known; the arguments were not
/// retained by the binary
#[derive(Debug, Clone)]
pub struct CustomAttributeTypeOnly {
    /// The attribute type
    pub attribute_type: CilTypeRc,
    /// Where the code constructing the attribute lives, if known
    pub address: Option<VirtualAddressRange>,
}

/// One custom attribute applied to a type or member.
///
/// Binaries produced by newer toolchains retain the full constructor invocation; older ones
/// only record which attribute type was applied.
#[derive(Debug, Clone)]
pub enum CustomAttributeUsage {
    /// Constructor call recovered with all arguments
    Invocation(CustomAttributeInvocation),
    /// Only the attribute type is known
    TypeOnly(CustomAttributeTypeOnly),
}

impl CustomAttributeUsage {
    /// The applied attribute type
    #[must_use]
    pub fn attribute_type(&self) -> &CilTypeRc {
        match self {
            CustomAttributeUsage::Invocation(invocation) => &invocation.attribute_type,
            CustomAttributeUsage::TypeOnly(type_only) => &type_only.attribute_type,
        }
    }

    /// Usage of `attribute_type` with a recovered, argument-less constructor call
    #[must_use]
    pub fn without_arguments(attribute_type: CilTypeRc) -> Self {
        CustomAttributeUsage::Invocation(CustomAttributeInvocation {
            attribute_type,
            value: CustomAttributeValue::default(),
        })
    }
}
