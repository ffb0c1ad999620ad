use thiserror::Error;

use crate::metadata::token::Token;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Rendering is a pure transformation, so every error is reported synchronously to the
/// immediate caller of the failing call. Retrying a failed call with the same input can never
/// produce a different outcome.
///
/// # Error Categories
///
/// ## Rendering Errors
/// - [`Error::UnsupportedUnderlyingType`] - Flags enum backed by a non-integer type
/// - [`Error::NotAnEnum`] - Enum member value paired with a type that is not an enum
/// - [`Error::ValueTypeMismatch`] - Value kind does not fit the declared type
/// - [`Error::RecursionLimit`] - Array values nested deeper than the configured limit
/// - [`Error::NameResolution`] - Failure raised by a [`crate::metadata::typesystem::TypeNameFormatter`]
///
/// ## Type Model Errors
/// - [`Error::TypeNotFound`] - Requested type not found in the registry
/// - [`Error::TypeError`] - General type model construction error
/// - [`Error::Malformed`] - Inconsistent type graph
///
/// # Examples
///
/// ```rust
/// use attrscope::Error;
///
/// fn describe(err: &Error) -> String {
///     match err {
///         Error::UnsupportedUnderlyingType(name) => format!("cannot decompose flags of {name}"),
///         Error::RecursionLimit(depth) => format!("values nested deeper than {depth}"),
///         other => other.to_string(),
///     }
/// }
/// # let _ = describe(&Error::RecursionLimit(64));
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The type graph handed to the builder or registry is inconsistent.
    ///
    /// The error includes the source location where the inconsistency was detected for
    /// debugging purposes.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// A flags enum is backed by an underlying type that is neither a signed nor an
    /// unsigned integer of 8, 16, 32 or 64 bits.
    ///
    /// Picking a width silently could misrender the bit pattern, so the rendering call fails.
    /// The associated value is the full name of the enum type.
    #[error("Unsupported underlying type for flags enum - {0}")]
    UnsupportedUnderlyingType(String),

    /// An enum member value was paired with a type that is not an enum.
    ///
    /// The associated value is the full name of the offending type.
    #[error("Type is not an enum - {0}")]
    NotAnEnum(String),

    /// The kind of a value does not fit the type it is rendered against, e.g. an array
    /// value with a declared type that is not an array.
    #[error("{0}")]
    ValueTypeMismatch(String),

    /// The name formatter failed to produce a name for a type.
    ///
    /// This error is raised by [`crate::metadata::typesystem::TypeNameFormatter`]
    /// implementations and is propagated by the renderers without interpretation.
    #[error("{0}")]
    NameResolution(String),

    /// Failed to find type in `TypeRegistry`.
    ///
    /// The associated [`Token`] identifies which type was not found.
    #[error("Failed to find type in TypeRegistry - {0}")]
    TypeNotFound(Token),

    /// General error during `TypeRegistry` or `TypeBuilder` usage.
    #[error("{0}")]
    TypeError(String),

    /// Recursion limit reached.
    ///
    /// Array values may nest arbitrarily in metadata; to prevent stack overflow a maximum
    /// depth is enforced. The associated value shows the limit that was reached.
    #[error("Reach the maximum recursion level allowed - {0}")]
    RecursionLimit(usize),
}
