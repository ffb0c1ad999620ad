use std::sync::Arc;

use crate::{
    metadata::{
        customattributes::{CustomAttributeUsage, CustomAttributeUsageRc},
        token::Token,
        typesystem::{
            CilConstructor, CilEnumMember, CilFlavor, CilPrimitiveData, CilPrimitiveKind, CilType,
            CilTypeRc, CilTypeRef, TypeRegistry, ENUM_BASE_TYPE, FLAGS_ATTRIBUTE,
        },
    },
    Error::TypeError,
    Result,
};

/// Provides a fluent API for building types
///
/// Every method that produces a new type registers it with the registry, so the type graph
/// stays alive as long as the registry does.
pub struct TypeBuilder {
    /// Type registry for storing the types
    registry: Arc<TypeRegistry>,
    /// Current type being built
    current_type: Option<CilTypeRc>,
    /// Token for the initial type (if applicable)
    token_init: Option<Token>,
}

impl TypeBuilder {
    /// Create a new builder with the given registry
    ///
    /// ## Arguments
    /// * 'registry' - The type registry to use
    pub fn new(registry: Arc<TypeRegistry>) -> Self {
        TypeBuilder {
            registry,
            current_type: None,
            token_init: None,
        }
    }

    /// Use a specific token (e.g. the original `TypeDef` token) for the next created type
    ///
    /// ## Arguments
    /// * 'token' - The token to use
    #[must_use]
    pub fn with_token_init(mut self, token: Token) -> Self {
        self.token_init = Some(token);
        self
    }

    fn token(&mut self) -> Token {
        self.token_init
            .take()
            .unwrap_or_else(|| self.registry.next_token())
    }

    fn create(
        &mut self,
        flavor: CilFlavor,
        namespace: &str,
        name: &str,
        base: Option<&CilTypeRc>,
    ) -> CilTypeRc {
        let token = self.token();
        let new_type = Arc::new(CilType::new(
            token,
            flavor,
            namespace.to_string(),
            name.to_string(),
            base,
        ));
        self.registry.insert(&new_type);
        new_type
    }

    fn well_known(&self, fullname: &str) -> Result<CilTypeRc> {
        self.registry
            .get_by_fullname(fullname)
            .ok_or_else(|| TypeError(format!("Well-known type {fullname} is not registered")))
    }

    fn current(&self) -> Result<&CilTypeRc> {
        self.current_type
            .as_ref()
            .ok_or_else(|| TypeError("No current type to modify".to_string()))
    }

    /// Start from a primitive type
    ///
    /// # Errors
    /// Returns an error if the primitive type is not registered.
    pub fn primitive(mut self, primitive: CilPrimitiveKind) -> Result<Self> {
        self.current_type = Some(self.registry.get_primitive(primitive)?);
        Ok(self)
    }

    /// Start from an existing type
    #[must_use]
    pub fn from_type(mut self, existing: &CilTypeRc) -> Self {
        self.current_type = Some(existing.clone());
        self
    }

    /// Create a class deriving from `System.Object`
    ///
    /// # Errors
    /// Returns an error if `System.Object` is not registered.
    pub fn class(mut self, namespace: &str, name: &str) -> Result<Self> {
        let object = self.registry.get_primitive(CilPrimitiveKind::Object)?;
        self.current_type = Some(self.create(CilFlavor::Class, namespace, name, Some(&object)));
        Ok(self)
    }

    /// Create a struct deriving from `System.ValueType`
    ///
    /// # Errors
    /// Returns an error if `System.ValueType` is not registered.
    pub fn value_type(mut self, namespace: &str, name: &str) -> Result<Self> {
        let base = self.registry.get_primitive(CilPrimitiveKind::ValueType)?;
        self.current_type = Some(self.create(CilFlavor::ValueType, namespace, name, Some(&base)));
        Ok(self)
    }

    /// Create an interface
    ///
    /// # Errors
    /// Never fails; returns `Result` for symmetry with the other constructors.
    pub fn interface(mut self, namespace: &str, name: &str) -> Result<Self> {
        self.current_type = Some(self.create(CilFlavor::Interface, namespace, name, None));
        Ok(self)
    }

    /// Create a class deriving from `System.Attribute`
    ///
    /// # Errors
    /// Returns an error if `System.Attribute` is not registered.
    pub fn attribute_class(mut self, namespace: &str, name: &str) -> Result<Self> {
        let base = self.well_known("System.Attribute")?;
        self.current_type = Some(self.create(CilFlavor::Class, namespace, name, Some(&base)));
        Ok(self)
    }

    /// Create an enum deriving from `System.Enum`, backed by `underlying`
    ///
    /// ## Arguments
    /// * 'namespace' - Namespace of the enum
    /// * 'name' - Name of the enum
    /// * 'underlying' - The underlying integer type
    ///
    /// # Errors
    /// Returns an error if `System.Enum` or the underlying primitive is not registered.
    pub fn enum_type(
        mut self,
        namespace: &str,
        name: &str,
        underlying: CilPrimitiveKind,
    ) -> Result<Self> {
        let base = self.well_known(ENUM_BASE_TYPE)?;
        let underlying = self.registry.get_primitive(underlying)?;
        let enum_type = self.create(CilFlavor::ValueType, namespace, name, Some(&base));
        enum_type.set_enum_underlying(&underlying)?;
        self.current_type = Some(enum_type);
        Ok(self)
    }

    /// Append a member to the current enum
    ///
    /// # Errors
    /// Returns an error if no current type is set or it is not an enum.
    pub fn enum_member(self, name: &str, value: CilPrimitiveData) -> Result<Self> {
        let current = self.current()?;
        if !current.is_enum() {
            return Err(crate::Error::NotAnEnum(current.fullname()));
        }
        current.enum_members.push(CilEnumMember {
            name: name.to_string(),
            value,
        });
        Ok(self)
    }

    /// Mark the current type with `[Flags]`
    ///
    /// # Errors
    /// Returns an error if no current type is set or `System.FlagsAttribute` is not registered.
    pub fn flags(self) -> Result<Self> {
        let flags = self.well_known(FLAGS_ATTRIBUTE)?;
        self.custom_attribute(Arc::new(CustomAttributeUsage::without_arguments(flags)))
    }

    /// Attach a custom attribute usage to the current type
    ///
    /// # Errors
    /// Returns an error if no current type is set.
    pub fn custom_attribute(self, usage: CustomAttributeUsageRc) -> Result<Self> {
        self.current()?.add_custom_attribute(usage);
        Ok(self)
    }

    /// Declare a constructor on the current type
    ///
    /// # Errors
    /// Returns an error if no current type is set.
    pub fn constructor(self, ctor: CilConstructor) -> Result<Self> {
        self.current()?.constructors.push(ctor);
        Ok(self)
    }

    /// Nest the current type inside `enclosing`
    ///
    /// # Errors
    /// Returns an error if no current type is set or it is already nested.
    pub fn nested_in(self, enclosing: &CilTypeRc) -> Result<Self> {
        let current = self.current()?;
        let previous_name = current.fullname();
        current.set_enclosing(enclosing)?;
        self.registry.reindex(current, &previous_name);
        Ok(self)
    }

    /// Create a single-dimensional array of the current type
    ///
    /// # Errors
    /// Returns an error if no current type is set.
    pub fn array(self) -> Result<Self> {
        self.multi_dimensional_array(1)
    }

    /// Create a multi-dimensional array of the current type
    ///
    /// ## Arguments
    /// * 'rank' - The dimensions for the array
    ///
    /// # Errors
    /// Returns an error if no current type is set or the rank is zero.
    pub fn multi_dimensional_array(mut self, rank: u32) -> Result<Self> {
        if rank == 0 {
            return Err(TypeError("Array rank must be at least 1".to_string()));
        }
        let element = self.current()?.clone();
        let suffix = format!("[{}]", ",".repeat(rank as usize - 1));
        let name = format!("{}{}", element.name, suffix);
        let array_type = self.create(
            CilFlavor::Array { rank },
            &element.namespace,
            &name,
            Some(&element),
        );
        self.current_type = Some(array_type);
        Ok(self)
    }

    /// Create a pointer to the current type
    ///
    /// # Errors
    /// Returns an error if no current type is set.
    pub fn pointer(mut self) -> Result<Self> {
        let element = self.current()?.clone();
        let name = format!("{}*", element.name);
        let pointer_type =
            self.create(CilFlavor::Pointer, &element.namespace, &name, Some(&element));
        self.current_type = Some(pointer_type);
        Ok(self)
    }

    /// Instantiate the current generic type definition with `args`
    ///
    /// # Errors
    /// Returns an error if no current type is set or no arguments are given.
    pub fn generic_instance(mut self, args: &[CilTypeRc]) -> Result<Self> {
        if args.is_empty() {
            return Err(TypeError(
                "Generic instance requires at least one argument".to_string(),
            ));
        }
        let definition = self.current()?.clone();
        let instance = self.create(
            CilFlavor::GenericInstance,
            &definition.namespace,
            &definition.name,
            Some(&definition),
        );
        for arg in args {
            instance.generic_args.push(CilTypeRef::new(arg));
        }
        self.current_type = Some(instance);
        Ok(self)
    }

    /// Create an unbound generic parameter (`T`)
    ///
    /// ## Arguments
    /// * 'name' - Parameter name
    /// * 'index' - Position in the declaring generic parameter list
    /// * 'method' - Whether the parameter belongs to a method rather than a type
    ///
    /// # Errors
    /// Never fails; returns `Result` for symmetry with the other constructors.
    pub fn generic_parameter(mut self, name: &str, index: u32, method: bool) -> Result<Self> {
        let param = self.create(CilFlavor::GenericParameter { index, method }, "", name, None);
        self.current_type = Some(param);
        Ok(self)
    }

    /// Finalize and return the built type
    ///
    /// # Errors
    /// Returns an error if no type has been built.
    pub fn build(self) -> Result<CilTypeRc> {
        match self.current_type {
            Some(t) => Ok(t),
            None => Err(TypeError("Failed to build requested Type".to_string())),
        }
    }
}
