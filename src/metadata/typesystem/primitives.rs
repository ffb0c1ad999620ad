use std::fmt;

use strum::{EnumCount, EnumIter};

use crate::metadata::{token::Token, typesystem::CilFlavor};

/// Integer payload of an enum value or enum member.
///
/// Values recovered from metadata keep the width they were stored with. Members of the same
/// enum may therefore be boxed with a different width than the value being rendered, so
/// comparisons go through [`CilPrimitiveData::value_eq`] rather than `==`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CilPrimitiveData {
    /// Boolean value
    Boolean(bool),
    /// Character value
    Char(char),
    /// 8-bit signed integer
    I1(i8),
    /// 8-bit unsigned integer
    U1(u8),
    /// 16-bit signed integer
    I2(i16),
    /// 16-bit unsigned integer
    U2(u16),
    /// 32-bit signed integer
    I4(i32),
    /// 32-bit unsigned integer
    U4(u32),
    /// 64-bit signed integer
    I8(i64),
    /// 64-bit unsigned integer
    U8(u64),
}

impl CilPrimitiveData {
    /// The flavor of the primitive type this payload is stored as
    #[must_use]
    pub fn flavor(&self) -> CilFlavor {
        match self {
            CilPrimitiveData::Boolean(_) => CilFlavor::Boolean,
            CilPrimitiveData::Char(_) => CilFlavor::Char,
            CilPrimitiveData::I1(_) => CilFlavor::I1,
            CilPrimitiveData::U1(_) => CilFlavor::U1,
            CilPrimitiveData::I2(_) => CilFlavor::I2,
            CilPrimitiveData::U2(_) => CilFlavor::U2,
            CilPrimitiveData::I4(_) => CilFlavor::I4,
            CilPrimitiveData::U4(_) => CilFlavor::U4,
            CilPrimitiveData::I8(_) => CilFlavor::I8,
            CilPrimitiveData::U8(_) => CilFlavor::U8,
        }
    }

    /// The numeric value, wide enough to hold every variant without loss
    #[must_use]
    pub fn as_i128(&self) -> i128 {
        match self {
            CilPrimitiveData::Boolean(value) => i128::from(*value),
            CilPrimitiveData::Char(value) => i128::from(u32::from(*value)),
            CilPrimitiveData::I1(value) => i128::from(*value),
            CilPrimitiveData::U1(value) => i128::from(*value),
            CilPrimitiveData::I2(value) => i128::from(*value),
            CilPrimitiveData::U2(value) => i128::from(*value),
            CilPrimitiveData::I4(value) => i128::from(*value),
            CilPrimitiveData::U4(value) => i128::from(*value),
            CilPrimitiveData::I8(value) => i128::from(*value),
            CilPrimitiveData::U8(value) => i128::from(*value),
        }
    }

    /// Numeric equality, independent of the stored width
    #[must_use]
    pub fn value_eq(&self, other: &CilPrimitiveData) -> bool {
        self.as_i128() == other.as_i128()
    }

    /// Widen into a signed 64-bit accumulator.
    ///
    /// Signed payloads are sign-extended, unsigned payloads keep their bit pattern
    /// (`u64::MAX` becomes `-1`).
    #[must_use]
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    pub fn widen_signed(&self) -> i64 {
        match self {
            CilPrimitiveData::U8(value) => *value as i64,
            // everything else fits i64
            other => other.as_i128() as i64,
        }
    }

    /// Widen into an unsigned 64-bit accumulator.
    ///
    /// Unsigned payloads are zero-extended, signed payloads are sign-extended and then
    /// reinterpreted (`-1i8` becomes `u64::MAX`).
    #[must_use]
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn widen_unsigned(&self) -> u64 {
        match self {
            CilPrimitiveData::U8(value) => *value,
            other => other.as_i128() as i64 as u64,
        }
    }

    /// Whether the numeric value is zero
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.as_i128() == 0
    }
}

impl fmt::Display for CilPrimitiveData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i128())
    }
}

/// The built-in primitive types known to every type registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum CilPrimitiveKind {
    /// System.Void - represents no value
    Void,
    /// System.Boolean - true/false value
    Boolean,
    /// System.Char - Unicode 16-bit character
    Char,
    /// System.SByte - signed 8-bit integer
    I1,
    /// System.Byte - unsigned 8-bit integer
    U1,
    /// System.Int16 - signed 16-bit integer
    I2,
    /// System.UInt16 - unsigned 16-bit integer
    U2,
    /// System.Int32 - signed 32-bit integer
    I4,
    /// System.UInt32 - unsigned 32-bit integer
    U4,
    /// System.Int64 - signed 64-bit integer
    I8,
    /// System.UInt64 - unsigned 64-bit integer
    U8,
    /// System.Single - 32-bit floating point
    R4,
    /// System.Double - 64-bit floating point
    R8,
    /// System.IntPtr - native sized signed integer
    I,
    /// System.UIntPtr - native sized unsigned integer
    U,
    /// System.Object - base class for all reference types
    Object,
    /// System.String - immutable string of Unicode characters
    String,
    /// System.TypedReference - type-safe pointer (used by compiler)
    TypedReference,
    /// System.ValueType - base class for value types
    ValueType,
}

impl CilPrimitiveKind {
    /// Artificial token under which the registry stores this primitive
    #[must_use]
    pub fn token(&self) -> Token {
        Token::new(match self {
            CilPrimitiveKind::Void => 0xF000_0001,
            CilPrimitiveKind::Boolean => 0xF000_0002,
            CilPrimitiveKind::Char => 0xF000_0003,
            CilPrimitiveKind::I1 => 0xF000_0004,
            CilPrimitiveKind::U1 => 0xF000_0005,
            CilPrimitiveKind::I2 => 0xF000_0006,
            CilPrimitiveKind::U2 => 0xF000_0007,
            CilPrimitiveKind::I4 => 0xF000_0008,
            CilPrimitiveKind::U4 => 0xF000_0009,
            CilPrimitiveKind::I8 => 0xF000_000A,
            CilPrimitiveKind::U8 => 0xF000_000B,
            CilPrimitiveKind::R4 => 0xF000_000C,
            CilPrimitiveKind::R8 => 0xF000_000D,
            CilPrimitiveKind::I => 0xF000_000E,
            CilPrimitiveKind::U => 0xF000_000F,
            CilPrimitiveKind::Object => 0xF000_0010,
            CilPrimitiveKind::String => 0xF000_0011,
            CilPrimitiveKind::TypedReference => 0xF000_0012,
            CilPrimitiveKind::ValueType => 0xF000_0013,
        })
    }

    /// Namespace of the runtime type
    #[must_use]
    pub fn namespace(&self) -> &'static str {
        "System"
    }

    /// Simple name of the runtime type
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            CilPrimitiveKind::Void => "Void",
            CilPrimitiveKind::Boolean => "Boolean",
            CilPrimitiveKind::Char => "Char",
            CilPrimitiveKind::I1 => "SByte",
            CilPrimitiveKind::U1 => "Byte",
            CilPrimitiveKind::I2 => "Int16",
            CilPrimitiveKind::U2 => "UInt16",
            CilPrimitiveKind::I4 => "Int32",
            CilPrimitiveKind::U4 => "UInt32",
            CilPrimitiveKind::I8 => "Int64",
            CilPrimitiveKind::U8 => "UInt64",
            CilPrimitiveKind::R4 => "Single",
            CilPrimitiveKind::R8 => "Double",
            CilPrimitiveKind::I => "IntPtr",
            CilPrimitiveKind::U => "UIntPtr",
            CilPrimitiveKind::Object => "Object",
            CilPrimitiveKind::String => "String",
            CilPrimitiveKind::TypedReference => "TypedReference",
            CilPrimitiveKind::ValueType => "ValueType",
        }
    }

    /// The C# keyword aliasing this type, if the language has one
    #[must_use]
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            CilPrimitiveKind::Void => Some("void"),
            CilPrimitiveKind::Boolean => Some("bool"),
            CilPrimitiveKind::Char => Some("char"),
            CilPrimitiveKind::I1 => Some("sbyte"),
            CilPrimitiveKind::U1 => Some("byte"),
            CilPrimitiveKind::I2 => Some("short"),
            CilPrimitiveKind::U2 => Some("ushort"),
            CilPrimitiveKind::I4 => Some("int"),
            CilPrimitiveKind::U4 => Some("uint"),
            CilPrimitiveKind::I8 => Some("long"),
            CilPrimitiveKind::U8 => Some("ulong"),
            CilPrimitiveKind::R4 => Some("float"),
            CilPrimitiveKind::R8 => Some("double"),
            CilPrimitiveKind::Object => Some("object"),
            CilPrimitiveKind::String => Some("string"),
            CilPrimitiveKind::I
            | CilPrimitiveKind::U
            | CilPrimitiveKind::TypedReference
            | CilPrimitiveKind::ValueType => None,
        }
    }

    /// The flavor types of this kind are registered with
    #[must_use]
    pub fn to_flavor(&self) -> CilFlavor {
        match self {
            CilPrimitiveKind::Void => CilFlavor::Void,
            CilPrimitiveKind::Boolean => CilFlavor::Boolean,
            CilPrimitiveKind::Char => CilFlavor::Char,
            CilPrimitiveKind::I1 => CilFlavor::I1,
            CilPrimitiveKind::U1 => CilFlavor::U1,
            CilPrimitiveKind::I2 => CilFlavor::I2,
            CilPrimitiveKind::U2 => CilFlavor::U2,
            CilPrimitiveKind::I4 => CilFlavor::I4,
            CilPrimitiveKind::U4 => CilFlavor::U4,
            CilPrimitiveKind::I8 => CilFlavor::I8,
            CilPrimitiveKind::U8 => CilFlavor::U8,
            CilPrimitiveKind::R4 => CilFlavor::R4,
            CilPrimitiveKind::R8 => CilFlavor::R8,
            CilPrimitiveKind::I => CilFlavor::I,
            CilPrimitiveKind::U => CilFlavor::U,
            CilPrimitiveKind::Object => CilFlavor::Object,
            CilPrimitiveKind::String => CilFlavor::String,
            CilPrimitiveKind::TypedReference => CilFlavor::ValueType,
            // System.ValueType itself is a reference type
            CilPrimitiveKind::ValueType => CilFlavor::Class,
        }
    }
}
