//! Central registry for the reconstructed type system.
//!
//! [`TypeRegistry`] owns every [`CilType`] of a type graph and indexes it by token and full
//! name. Generic arguments are the only weak links between types, so the registry is what
//! keeps them alive. Every registry starts out with the primitive types and the handful of
//! well-known framework types the renderers rely on.

use std::sync::{
    atomic::{AtomicU32, Ordering},
    Arc,
};

use crossbeam_skiplist::SkipMap;
use dashmap::DashMap;
use strum::IntoEnumIterator;

use crate::{
    metadata::{
        customattributes::CustomAttributeUsage,
        token::Token,
        typesystem::{
            CilConstructor, CilEnumMember, CilFlavor, CilParameter, CilPrimitiveData,
            CilPrimitiveKind, CilType, CilTypeRc, ATTRIBUTE_USAGE_ATTRIBUTE, ENUM_BASE_TYPE,
            FLAGS_ATTRIBUTE,
        },
    },
    Error::TypeNotFound,
    Result,
};

/// Members of `System.AttributeTargets`, in declaration order
const ATTRIBUTE_TARGETS: [(&str, i32); 16] = [
    ("Assembly", 0x0001),
    ("Module", 0x0002),
    ("Class", 0x0004),
    ("Struct", 0x0008),
    ("Enum", 0x0010),
    ("Constructor", 0x0020),
    ("Method", 0x0040),
    ("Property", 0x0080),
    ("Field", 0x0100),
    ("Event", 0x0200),
    ("Interface", 0x0400),
    ("Parameter", 0x0800),
    ("Delegate", 0x1000),
    ("ReturnValue", 0x2000),
    ("GenericParameter", 0x4000),
    ("All", 0x7FFF),
];

/// Thread-safe registry of all types of a reconstructed type system.
///
/// # Performance Characteristics
///
/// - **Token lookup**: O(log n) using skip list
/// - **Name lookup**: O(1) average using hash indices
/// - **Registration**: O(log n) + O(1) for indexing
pub struct TypeRegistry {
    /// Primary type storage indexed by tokens
    types: SkipMap<Token, CilTypeRc>,
    /// Atomic counter for generating unique artificial tokens for new types
    next_token: AtomicU32,
    /// Secondary index: types indexed by full name (namespace.name)
    types_by_fullname: DashMap<String, Vec<Token>>,
}

impl TypeRegistry {
    /// Create a new type registry with initialized primitive and well-known types.
    ///
    /// # Well-known Types
    ///
    /// Besides the primitives, the following framework types are registered:
    /// - `System.Enum`, the base of every enum
    /// - `System.Attribute`, the base of every attribute
    /// - `System.FlagsAttribute`, the marker of flags enums
    /// - `System.AttributeUsageAttribute` and the `System.AttributeTargets` flags enum
    ///
    /// # Errors
    ///
    /// This function will return an error if the type initialization fails, which could
    /// happen due to internal inconsistencies during registry setup.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attrscope::metadata::typesystem::TypeRegistry;
    ///
    /// let registry = TypeRegistry::new()?;
    /// assert!(registry.get_by_fullname("System.String").is_some());
    /// assert!(registry.get_by_fullname("System.FlagsAttribute").is_some());
    /// # Ok::<(), attrscope::Error>(())
    /// ```
    pub fn new() -> Result<Self> {
        let registry = TypeRegistry {
            types: SkipMap::new(),
            next_token: AtomicU32::new(0xF000_0020), // Start after reserved primitives
            types_by_fullname: DashMap::new(),
        };

        registry.initialize_primitives();
        registry.initialize_well_known()?;
        Ok(registry)
    }

    fn initialize_primitives(&self) {
        for kind in CilPrimitiveKind::iter() {
            let new_type = Arc::new(CilType::new(
                kind.token(),
                kind.to_flavor(),
                kind.namespace().to_string(),
                kind.name().to_string(),
                None,
            ));
            self.insert(&new_type);
        }
    }

    fn initialize_well_known(&self) -> Result<()> {
        let object = self.get_primitive(CilPrimitiveKind::Object)?;
        let value_type = self.get_primitive(CilPrimitiveKind::ValueType)?;

        let enum_type = self.create_type("System", "Enum", CilFlavor::Class, Some(&value_type));
        let attribute = self.create_type("System", "Attribute", CilFlavor::Class, Some(&object));

        let flags = self.create_type(
            "System",
            "FlagsAttribute",
            CilFlavor::Class,
            Some(&attribute),
        );
        flags.constructors.push(CilConstructor::public(vec![]));

        let targets = self.create_type(
            "System",
            "AttributeTargets",
            CilFlavor::ValueType,
            Some(&enum_type),
        );
        targets.set_enum_underlying(&self.get_primitive(CilPrimitiveKind::I4)?)?;
        for (name, value) in ATTRIBUTE_TARGETS {
            targets.enum_members.push(CilEnumMember {
                name: name.to_string(),
                value: CilPrimitiveData::I4(value),
            });
        }
        targets.add_custom_attribute(Arc::new(CustomAttributeUsage::without_arguments(
            flags.clone(),
        )));

        let usage = self.create_type(
            "System",
            "AttributeUsageAttribute",
            CilFlavor::Class,
            Some(&attribute),
        );
        usage.constructors.push(CilConstructor::public(vec![CilParameter {
            name: "validOn".to_string(),
            optional: false,
        }]));

        debug_assert_eq!(flags.fullname(), FLAGS_ATTRIBUTE);
        debug_assert_eq!(usage.fullname(), ATTRIBUTE_USAGE_ATTRIBUTE);
        debug_assert_eq!(enum_type.fullname(), ENUM_BASE_TYPE);
        Ok(())
    }

    fn create_type(
        &self,
        namespace: &str,
        name: &str,
        flavor: CilFlavor,
        base: Option<&CilTypeRc>,
    ) -> CilTypeRc {
        let new_type = Arc::new(CilType::new(
            self.next_token(),
            flavor,
            namespace.to_string(),
            name.to_string(),
            base,
        ));
        self.insert(&new_type);
        new_type
    }

    /// Hand out the next free artificial token
    pub fn next_token(&self) -> Token {
        Token::new(self.next_token.fetch_add(1, Ordering::Relaxed))
    }

    /// Insert a `CilType` into the registry.
    ///
    /// Registering the same token twice replaces the stored type but does not duplicate the
    /// name indices.
    ///
    /// ## Arguments
    /// * '`new_type`' - The type to register
    pub fn insert(&self, new_type: &CilTypeRc) {
        let known = self.types.contains_key(&new_type.token);
        self.types.insert(new_type.token, new_type.clone());
        if known {
            return;
        }

        self.types_by_fullname
            .entry(new_type.fullname())
            .or_default()
            .push(new_type.token);
    }

    /// Move a type to its current full name in the name index, after its enclosing type was
    /// linked.
    ///
    /// ## Arguments
    /// * 'ty' - The registered type
    /// * '`previous_name`' - The full name it was indexed under
    pub fn reindex(&self, ty: &CilTypeRc, previous_name: &str) {
        if let Some(mut tokens) = self.types_by_fullname.get_mut(previous_name) {
            tokens.retain(|token| *token != ty.token);
        }
        self.types_by_fullname.remove_if(previous_name, |_, tokens| tokens.is_empty());
        self.types_by_fullname
            .entry(ty.fullname())
            .or_default()
            .push(ty.token);
    }

    /// Get a primitive type by its `CilPrimitiveKind` value
    ///
    /// ## Arguments
    /// * 'primitive' - The kind of primitive to look up
    ///
    /// # Errors
    /// Returns an error if the primitive type is not found in the registry.
    pub fn get_primitive(&self, primitive: CilPrimitiveKind) -> Result<CilTypeRc> {
        match self.types.get(&primitive.token()) {
            Some(res) => Ok(res.value().clone()),
            None => Err(TypeNotFound(primitive.token())),
        }
    }

    /// Look up a type by its token.
    pub fn get(&self, token: &Token) -> Option<CilTypeRc> {
        self.types.get(token).map(|entry| entry.value().clone())
    }

    /// Look up the first type registered under a full name (`Namespace.Name`, nested types
    /// joined with `+`).
    pub fn get_by_fullname(&self, fullname: &str) -> Option<CilTypeRc> {
        self.types_by_fullname
            .get(fullname)
            .and_then(|tokens| tokens.value().iter().find_map(|token| self.get(token)))
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
