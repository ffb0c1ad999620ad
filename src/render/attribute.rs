//! Rendering of attribute usages as `[Name(...)]` annotations.
//!
//! # Record Shapes
//!
//! - [`CustomAttributeUsage::Invocation`]: rendered with its arguments, positional arguments
//!   first, then field assignments, then property assignments
//! - [`CustomAttributeUsage::TypeOnly`]: rendered without arguments. With
//!   [`crate::render::AttributeRenderFlags::MUST_COMPILE`] the annotation is commented out
//!   when the attribute has no constructor callable without arguments, and `[AttributeUsage]`
//!   is patched to `[AttributeUsage(AttributeTargets.All)]`
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use attrscope::prelude::*;
//!
//! let registry = Arc::new(TypeRegistry::new()?);
//! let serializable = TypeBuilder::new(registry.clone())
//!     .attribute_class("System", "SerializableAttribute")?
//!     .build()?;
//!
//! let renderer = AttributeRenderer::new(
//!     CSharpNameFormatter::new(),
//!     RenderConfig::default(),
//!     AttributeRenderOptions::default().with_line_prefix("\t"),
//! );
//! let usage = CustomAttributeUsage::without_arguments(serializable);
//! let text = renderer.render([&usage], &NamespaceScope::new("System"))?;
//! assert_eq!(text, "\t[Serializable]\n");
//! # Ok::<(), attrscope::Error>(())
//! ```

use rayon::prelude::*;

use crate::{
    metadata::{
        customattributes::{
            CustomAttributeInvocation, CustomAttributeTypeOnly, CustomAttributeUsage,
            CustomAttributeUsageRc,
        },
        typesystem::{CilType, TypeNameFormatter, ATTRIBUTE_USAGE_ATTRIBUTE},
    },
    render::{
        format_address_range, to_identifier, AttributeRenderOptions, LiteralRenderer,
        RenderConfig,
    },
    Result,
};

const ATTRIBUTE_SUFFIX: &str = "Attribute";
const ALL_TARGETS_ARGUMENTS: &str = "(AttributeTargets.All)";

/// Renders collections of attribute usages
pub struct AttributeRenderer<F: TypeNameFormatter> {
    literal: LiteralRenderer<F>,
    options: AttributeRenderOptions,
}

impl<F: TypeNameFormatter> AttributeRenderer<F> {
    /// Create a renderer
    ///
    /// ## Arguments
    /// * 'formatter' - Resolves type names of attributes and argument values
    /// * 'config' - Escaping and recursion limits
    /// * 'options' - Layout of the annotations
    pub fn new(formatter: F, config: RenderConfig, options: AttributeRenderOptions) -> Self {
        AttributeRenderer {
            literal: LiteralRenderer::new(formatter, config),
            options,
        }
    }

    /// The renderer used for argument values
    pub fn literal(&self) -> &LiteralRenderer<F> {
        &self.literal
    }

    /// The active options
    pub fn options(&self) -> &AttributeRenderOptions {
        &self.options
    }

    /// Render `usages` in order, one annotation each
    ///
    /// # Errors
    /// Returns the first error raised while rendering a usage.
    pub fn render<'a, I>(&self, usages: I, scope: &F::Scope) -> Result<String>
    where
        I: IntoIterator<Item = &'a CustomAttributeUsage>,
    {
        let mut text = String::new();
        for usage in usages {
            text.push_str(&self.render_usage(usage, scope)?);
        }
        Ok(text)
    }

    /// Render all attributes applied to `ty`
    ///
    /// # Errors
    /// Returns the first error raised while rendering a usage.
    pub fn render_type_attributes(&self, ty: &CilType, scope: &F::Scope) -> Result<String> {
        self.render(
            ty.custom_attributes.iter().map(|(_, usage)| usage.as_ref()),
            scope,
        )
    }

    /// Render many independent usage collections in parallel
    ///
    /// The results are returned in input order. If any collection fails, the error of the
    /// first failing collection (in input order) is returned.
    ///
    /// # Errors
    /// See [`AttributeRenderer::render`].
    pub fn render_many<C>(&self, collections: &[C], scope: &F::Scope) -> Result<Vec<String>>
    where
        C: AsRef<[CustomAttributeUsageRc]> + Sync,
    {
        let results: Vec<Result<String>> = collections
            .par_iter()
            .map(|usages| self.render(usages.as_ref().iter().map(AsRef::as_ref), scope))
            .collect();
        results.into_iter().collect()
    }

    /// Render a single usage, including its trailing space or newline
    ///
    /// # Errors
    /// Returns an error if an argument value cannot be rendered or the name formatter fails.
    pub fn render_usage(&self, usage: &CustomAttributeUsage, scope: &F::Scope) -> Result<String> {
        let mut text = match usage {
            CustomAttributeUsage::Invocation(invocation) => {
                self.render_invocation(invocation, scope)?
            }
            CustomAttributeUsage::TypeOnly(type_only) => self.render_type_only(type_only, scope)?,
        };
        log::trace!("Rendered {}: {}", usage.attribute_type().fullname(), text);

        text.push(if self.options.is_inline() { ' ' } else { '\n' });
        Ok(text)
    }

    /// The attribute name as written in an annotation: the scoped name cut at the last
    /// occurrence of `Attribute`
    ///
    /// # Errors
    /// Propagates failures of the name formatter.
    pub fn display_name(&self, attribute_type: &CilType, scope: &F::Scope) -> Result<String> {
        let mut name = self.literal.type_name(attribute_type, scope)?;
        if let Some(pos) = name.rfind(ATTRIBUTE_SUFFIX) {
            name.truncate(pos);
        }
        Ok(name)
    }

    fn render_invocation(
        &self,
        invocation: &CustomAttributeInvocation,
        scope: &F::Scope,
    ) -> Result<String> {
        let name = self.display_name(&invocation.attribute_type, scope)?;
        let value = &invocation.value;

        let mut arguments = Vec::with_capacity(value.argument_count());
        for fixed in &value.fixed_args {
            arguments.push(self.literal.render_typed(fixed, scope)?);
        }
        for named in value.fields().chain(value.properties()) {
            let rendered = self.literal.render(&named.value, &named.arg_type, scope)?;
            let member = to_identifier(
                &named.name,
                false,
                &self.literal.config().allowed_chars,
            );
            arguments.push(format!("{member} = {rendered}"));
        }

        let arguments = if arguments.is_empty() {
            String::new()
        } else {
            format!("({})", arguments.join(", "))
        };

        Ok(format!(
            "{}[{}{}{}]",
            self.options.line_prefix, self.options.attribute_prefix, name, arguments
        ))
    }

    fn render_type_only(
        &self,
        type_only: &CustomAttributeTypeOnly,
        scope: &F::Scope,
    ) -> Result<String> {
        let attribute_type = &type_only.attribute_type;
        let name = self.display_name(attribute_type, scope)?;
        let inline = self.options.is_inline();

        let mut comment_out =
            self.options.must_compile() && !attribute_type.has_default_constructor();
        let mut arguments = "";
        if self.options.must_compile() && attribute_type.fullname() == ATTRIBUTE_USAGE_ATTRIBUTE {
            log::debug!("Applying AttributeUsage override for compilable output");
            comment_out = false;
            arguments = ALL_TARGETS_ARGUMENTS;
        } else if comment_out {
            log::debug!(
                "Commenting out {}, it has no parameterless constructor",
                attribute_type.fullname()
            );
        }

        let (open, close) = match (comment_out, inline) {
            (false, _) => ("", ""),
            (true, true) => ("/* ", " */"),
            (true, false) => ("// ", ""),
        };

        let mut text = format!(
            "{}{}[{}{}{}]{}",
            self.options.line_prefix,
            open,
            self.options.attribute_prefix,
            name,
            arguments,
            close
        );

        if self.options.emit_address() {
            let address = format_address_range(type_only.address);
            if inline {
                text.push_str(&format!(" /* {address} */"));
            } else {
                text.push_str(&format!(" // {address}"));
            }
        }
        Ok(text)
    }
}
