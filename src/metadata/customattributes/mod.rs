//! Custom attribute usages recovered from .NET / IL2CPP metadata.
//!
//! Depending on the metadata version, an attribute usage is recovered in one of two shapes:
//!
//! - **Invocation** - The constructor call is retained: positional arguments followed by named
//!   field and property assignments, each value paired with its declared type
//! - **Type only** - Only the attribute type is known, optionally together with the address of
//!   the code that constructs the attribute at runtime
//!
//! Both shapes are variants of [`CustomAttributeUsage`], so a usage can never be in an
//! ambiguous "both" or "neither" state.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use attrscope::metadata::{
//!     customattributes::{
//!         CustomAttributeArgument, CustomAttributeInvocation, CustomAttributeTypedArgument,
//!         CustomAttributeUsage, CustomAttributeValue,
//!     },
//!     typesystem::{CilPrimitiveKind, TypeBuilder, TypeRegistry},
//! };
//!
//! let registry = Arc::new(TypeRegistry::new()?);
//! let obsolete = TypeBuilder::new(registry.clone())
//!     .attribute_class("System", "ObsoleteAttribute")?
//!     .build()?;
//!
//! let usage = CustomAttributeUsage::Invocation(CustomAttributeInvocation {
//!     attribute_type: obsolete,
//!     value: CustomAttributeValue {
//!         fixed_args: vec![CustomAttributeTypedArgument {
//!             arg_type: registry.get_primitive(CilPrimitiveKind::String)?,
//!             value: CustomAttributeArgument::String("use Render2".to_string()),
//!         }],
//!         named_args: vec![],
//!     },
//! });
//! assert_eq!(usage.attribute_type().name, "ObsoleteAttribute");
//! # Ok::<(), attrscope::Error>(())
//! ```

mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        metadata::typesystem::CilPrimitiveKind,
        test::{create_attribute, create_registry},
    };

    #[test]
    fn test_named_argument_partition() {
        let registry = create_registry();
        let int_type = registry.get_primitive(CilPrimitiveKind::I4).unwrap();
        let named = |is_field: bool, name: &str, value: i32| CustomAttributeNamedArgument {
            is_field,
            name: name.to_string(),
            arg_type: int_type.clone(),
            value: CustomAttributeArgument::I4(value),
        };

        let value = CustomAttributeValue {
            fixed_args: vec![CustomAttributeTypedArgument {
                arg_type: int_type.clone(),
                value: CustomAttributeArgument::I4(1),
            }],
            named_args: vec![
                named(false, "Order", 2),
                named(true, "level", 3),
                named(false, "Priority", 4),
                named(true, "weight", 5),
            ],
        };

        assert_eq!(value.argument_count(), 5);
        let fields: Vec<&str> = value.fields().map(|arg| arg.name.as_str()).collect();
        assert_eq!(fields, vec!["level", "weight"]);
        let properties: Vec<&str> = value.properties().map(|arg| arg.name.as_str()).collect();
        assert_eq!(properties, vec!["Order", "Priority"]);
    }

    #[test]
    fn test_usage_attribute_type() {
        let registry = create_registry();
        let attr = create_attribute(&registry, "MarkerAttribute", true);

        let invocation = CustomAttributeUsage::without_arguments(attr.clone());
        assert_eq!(invocation.attribute_type().name, "MarkerAttribute");

        let type_only = CustomAttributeUsage::TypeOnly(CustomAttributeTypeOnly {
            attribute_type: attr,
            address: Some(VirtualAddressRange::new(0x1000, 0x1040)),
        });
        assert_eq!(type_only.attribute_type().fullname(), "Tests.MarkerAttribute");
    }
}
