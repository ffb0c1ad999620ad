//! Rendering configuration
//!
//! [`RenderConfig`] controls escaping and recursion limits of every renderer;
//! [`AttributeRenderOptions`] additionally controls the layout of attribute annotations.

use bitflags::bitflags;

/// Default maximum nesting of array values
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Configuration shared by the literal and attribute renderers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Characters exempt from unicode escaping in strings and from sanitizing in identifiers
    pub allowed_chars: String,

    /// Maximum nesting depth of array values (default: 64)
    pub max_depth: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            allowed_chars: String::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl RenderConfig {
    /// Creates a configuration that escapes everything outside printable ASCII
    #[must_use]
    pub fn ascii() -> Self {
        Self::default()
    }

    /// Creates a configuration that passes the given characters through unescaped
    ///
    /// Useful for binaries with obfuscated, non-ASCII names that should stay readable.
    #[must_use]
    pub fn with_allowed_chars(allowed: &str) -> Self {
        Self {
            allowed_chars: allowed.to_string(),
            ..Self::default()
        }
    }

    /// Override the maximum array nesting depth
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Whether `c` is on the allow-list
    #[must_use]
    pub fn is_allowed(&self, c: char) -> bool {
        self.allowed_chars.contains(c)
    }
}

/// How consecutive attribute annotations are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttributeLayout {
    /// All annotations on one line, each followed by a space
    Inline,
    /// One annotation per line, each followed by a newline
    #[default]
    OnePerLine,
}

bitflags! {
    #[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
    /// Optional behaviour of the attribute renderer
    pub struct AttributeRenderFlags : u32 {
        /// Append the address of the attribute generator to type-only usages
        const EMIT_ADDRESS = 0x0001;
        /// Keep the output compilable: comment out annotations that cannot be applied and
        /// patch `[AttributeUsage]`
        const MUST_COMPILE = 0x0002;
    }
}

/// Formatting options of [`crate::render::AttributeRenderer`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttributeRenderOptions {
    /// Text emitted before every annotation, e.g. indentation
    pub line_prefix: String,
    /// Text emitted between `[` and the attribute name, e.g. `assembly: `
    pub attribute_prefix: String,
    /// Layout of consecutive annotations
    pub layout: AttributeLayout,
    /// Optional behaviour
    pub flags: AttributeRenderFlags,
}

impl AttributeRenderOptions {
    /// Set the line prefix
    #[must_use]
    pub fn with_line_prefix(mut self, prefix: &str) -> Self {
        self.line_prefix = prefix.to_string();
        self
    }

    /// Set the attribute-name prefix
    #[must_use]
    pub fn with_attribute_prefix(mut self, prefix: &str) -> Self {
        self.attribute_prefix = prefix.to_string();
        self
    }

    /// Set the layout
    #[must_use]
    pub fn with_layout(mut self, layout: AttributeLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Add flags to the current set
    #[must_use]
    pub fn with_flags(mut self, flags: AttributeRenderFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Whether annotations are rendered on a single line
    #[must_use]
    pub fn is_inline(&self) -> bool {
        self.layout == AttributeLayout::Inline
    }

    /// Whether address comments are requested
    #[must_use]
    pub fn emit_address(&self) -> bool {
        self.flags.contains(AttributeRenderFlags::EMIT_ADDRESS)
    }

    /// Whether the output must stay compilable
    #[must_use]
    pub fn must_compile(&self) -> bool {
        self.flags.contains(AttributeRenderFlags::MUST_COMPILE)
    }
}
