//! Type handles used by the [`crate::metadata::typesystem::TypeRegistry`].
//!
//! A [`Token`] is a 32-bit value whose high byte names the table the type originates from
//! and whose lower 24 bits are the row. Types recovered from a binary keep their original
//! `TypeDef` (`0x02`) token, primitives and types created by the registry use the artificial
//! `0xF0` table.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Metadata token identifying a type in the reconstructed type system.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Token(pub u32);

impl Token {
    /// Create a new token from its raw value
    #[must_use]
    pub fn new(value: u32) -> Self {
        Token(value)
    }

    /// The raw 32-bit value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// The table id (high byte)
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn table(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// The row id (lower 24 bits)
    #[must_use]
    pub fn row(&self) -> u32 {
        self.0 & 0x00FF_FFFF
    }

    /// Whether this is the null token
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// Whether this token was handed out by the registry rather than read from a binary
    #[must_use]
    pub fn is_artificial(&self) -> bool {
        self.table() == 0xF0
    }
}

impl From<u32> for Token {
    fn from(value: u32) -> Self {
        Token(value)
    }
}

impl From<Token> for u32 {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token(0x{:08x}, table: 0x{:02x}, row: {})",
            self.0,
            self.table(),
            self.row()
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}
