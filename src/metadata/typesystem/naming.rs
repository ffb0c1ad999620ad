//! Scoped display names for types.
//!
//! The renderers never build type names themselves; they ask a [`TypeNameFormatter`] for the
//! name of a type as seen from a naming scope. The scope is opaque to the renderers and is
//! handed through unchanged.

use crate::{
    metadata::typesystem::{CilFlavor, CilType, CilTypeRc},
    Error::NameResolution,
    Result,
};

/// Resolves the display name of a type as seen from a naming scope
pub trait TypeNameFormatter: Send + Sync {
    /// Context deciding whether a name needs qualification
    type Scope: Send + Sync;

    /// The possibly-qualified display name of `ty` when referenced from `scope`
    ///
    /// # Errors
    /// Returns [`crate::Error::NameResolution`] if the name cannot be produced, e.g. because a
    /// linked type is no longer alive.
    fn scoped_name(&self, ty: &CilType, scope: &Self::Scope) -> Result<String>;
}

/// The namespace context of a C# source file: the namespace being declared and the
/// `using` directives in effect
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceScope {
    /// Namespace the rendered code lives in (empty for the global namespace)
    pub current_namespace: String,
    /// Namespaces imported by `using` directives
    pub using_namespaces: Vec<String>,
}

impl NamespaceScope {
    /// Scope of code declared in `namespace`
    #[must_use]
    pub fn new(namespace: &str) -> Self {
        NamespaceScope {
            current_namespace: namespace.to_string(),
            using_namespaces: Vec::new(),
        }
    }

    /// Add a `using` directive
    #[must_use]
    pub fn with_using(mut self, namespace: &str) -> Self {
        self.using_namespaces.push(namespace.to_string());
        self
    }

    /// Whether types of `namespace` can be referenced without qualification
    #[must_use]
    pub fn resolves(&self, namespace: &str) -> bool {
        if namespace.is_empty() {
            return true;
        }

        let enclosing = self.current_namespace == namespace
            || self
                .current_namespace
                .strip_prefix(namespace)
                .is_some_and(|rest| rest.starts_with('.'));

        enclosing || self.using_namespaces.iter().any(|using| using == namespace)
    }
}

/// C# flavored names: keyword aliases, `T[]` arrays, `List<int>` generics and `Outer.Inner`
/// nesting
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpNameFormatter;

impl CSharpNameFormatter {
    /// Create a new formatter
    #[must_use]
    pub fn new() -> Self {
        CSharpNameFormatter
    }

    fn keyword(ty: &CilType) -> Option<&'static str> {
        let kind = ty.flavor.to_primitive_kind()?;
        if ty.namespace == kind.namespace() && ty.name == kind.name() {
            kind.keyword()
        } else {
            None
        }
    }

    fn linked(ty: Option<CilTypeRc>, owner: &CilType, what: &str) -> Result<CilTypeRc> {
        ty.ok_or_else(|| NameResolution(format!("{what} of {} is not available", owner.fullname())))
    }

    fn simple_name(name: &str) -> &str {
        match name.find('`') {
            Some(pos) => &name[..pos],
            None => name,
        }
    }

    fn format(&self, ty: &CilType, scope: &NamespaceScope) -> Result<String> {
        if let Some(keyword) = Self::keyword(ty) {
            return Ok(keyword.to_string());
        }

        match &ty.flavor {
            CilFlavor::Array { rank } => {
                let element = Self::linked(ty.element_type(), ty, "Element type")?;
                let commas = ",".repeat((*rank).saturating_sub(1) as usize);
                Ok(format!("{}[{}]", self.format(&element, scope)?, commas))
            }
            CilFlavor::Pointer => {
                let element = Self::linked(ty.element_type(), ty, "Element type")?;
                Ok(format!("{}*", self.format(&element, scope)?))
            }
            CilFlavor::GenericParameter { .. } => Ok(ty.name.clone()),
            CilFlavor::GenericInstance => {
                let definition = Self::linked(ty.base(), ty, "Generic definition")?;
                let mut args = Vec::with_capacity(ty.generic_args.count());
                for (_, arg) in ty.generic_args.iter() {
                    let arg = Self::linked(arg.upgrade(), ty, "Generic argument")?;
                    args.push(self.format(&arg, scope)?);
                }
                Ok(format!(
                    "{}<{}>",
                    self.format(&definition, scope)?,
                    args.join(", ")
                ))
            }
            _ => {
                let name = Self::simple_name(&ty.name);
                if let Some(enclosing) = ty.enclosing() {
                    Ok(format!("{}.{}", self.format(&enclosing, scope)?, name))
                } else if scope.resolves(&ty.namespace) {
                    Ok(name.to_string())
                } else {
                    Ok(format!("{}.{}", ty.namespace, name))
                }
            }
        }
    }
}

impl TypeNameFormatter for CSharpNameFormatter {
    type Scope = NamespaceScope;

    fn scoped_name(&self, ty: &CilType, scope: &NamespaceScope) -> Result<String> {
        self.format(ty, scope)
    }
}
