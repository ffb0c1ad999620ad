//! Shared factories for unit tests.

use std::sync::Arc;

use crate::metadata::{
    customattributes::{
        CustomAttributeArgument, CustomAttributeInvocation, CustomAttributeNamedArgument,
        CustomAttributeTypedArgument, CustomAttributeUsage, CustomAttributeUsageRc,
        CustomAttributeValue,
    },
    typesystem::{
        CilConstructor, CilParameter, CilPrimitiveData, CilPrimitiveKind, CilTypeRc,
        TypeBuilder, TypeRegistry,
    },
};

/// Namespace every factory-created type lives in
pub const TEST_NAMESPACE: &str = "Tests";

// Helper function to create a registry with primitives and well-known types
pub fn create_registry() -> Arc<TypeRegistry> {
    Arc::new(TypeRegistry::new().unwrap())
}

// Helper function to create an int-backed enum
pub fn create_enum(
    registry: &Arc<TypeRegistry>,
    name: &str,
    members: &[(&str, i32)],
) -> CilTypeRc {
    let mut builder = TypeBuilder::new(registry.clone())
        .enum_type(TEST_NAMESPACE, name, CilPrimitiveKind::I4)
        .unwrap();
    for (member, value) in members {
        builder = builder
            .enum_member(member, CilPrimitiveData::I4(*value))
            .unwrap();
    }
    builder.build().unwrap()
}

// Helper function to create an int-backed [Flags] enum
pub fn create_flags_enum(
    registry: &Arc<TypeRegistry>,
    name: &str,
    members: &[(&str, i32)],
) -> CilTypeRc {
    let flags = create_enum(registry, name, members);
    TypeBuilder::new(registry.clone())
        .from_type(&flags)
        .flags()
        .unwrap()
        .build()
        .unwrap()
}

// Helper function to create an attribute class, optionally with a parameterless constructor
pub fn create_attribute(
    registry: &Arc<TypeRegistry>,
    name: &str,
    has_default_ctor: bool,
) -> CilTypeRc {
    let params = if has_default_ctor {
        vec![]
    } else {
        vec![CilParameter {
            name: "value".to_string(),
            optional: false,
        }]
    };

    TypeBuilder::new(registry.clone())
        .attribute_class(TEST_NAMESPACE, name)
        .unwrap()
        .constructor(CilConstructor::public(params))
        .unwrap()
        .build()
        .unwrap()
}

// Helper function to pair a value with a primitive declared type
pub fn typed(
    registry: &Arc<TypeRegistry>,
    kind: CilPrimitiveKind,
    value: CustomAttributeArgument,
) -> CustomAttributeTypedArgument {
    CustomAttributeTypedArgument {
        arg_type: registry.get_primitive(kind).unwrap(),
        value,
    }
}

// Helper function to create a named field or property assignment of a primitive type
pub fn named(
    registry: &Arc<TypeRegistry>,
    is_field: bool,
    name: &str,
    kind: CilPrimitiveKind,
    value: CustomAttributeArgument,
) -> CustomAttributeNamedArgument {
    CustomAttributeNamedArgument {
        is_field,
        name: name.to_string(),
        arg_type: registry.get_primitive(kind).unwrap(),
        value,
    }
}

// Helper function to create a fully recovered attribute usage
pub fn create_invocation(
    attribute_type: &CilTypeRc,
    fixed_args: Vec<CustomAttributeTypedArgument>,
    named_args: Vec<CustomAttributeNamedArgument>,
) -> CustomAttributeUsageRc {
    Arc::new(CustomAttributeUsage::Invocation(CustomAttributeInvocation {
        attribute_type: attribute_type.clone(),
        value: CustomAttributeValue {
            fixed_args,
            named_args,
        },
    }))
}
