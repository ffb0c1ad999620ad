//! Rendering of single typed values as C# literals.
//!
//! # Value Kinds
//!
//! | Kind | Example output |
//! |------|----------------|
//! | Boolean | `true` |
//! | Single / Double | `1.5f`, `0.25`, `1F / 0F` |
//! | String | `"line\n"` |
//! | Char | `'a'`, `'\x000a'` |
//! | Integer | `-42` |
//! | Type | `typeof(Player)` |
//! | Array | `new int[2] { 1, 2 }` |
//! | Enum | `Color.Red`, `Access.Read \| Access.Write`, `(Color) 7` |
//! | Null | `null`, `default` |
//!
//! Integer values declared as an enum type are rendered as enum members as well.

use std::ops::BitAnd;

use crate::{
    metadata::{
        customattributes::{CustomAttributeArgument, CustomAttributeTypedArgument},
        typesystem::{CilPrimitiveData, CilType, TypeNameFormatter},
    },
    render::{
        escape::{escape_string, is_printable_ascii, to_identifier},
        RenderConfig,
    },
    Error::{
        NameResolution, NotAnEnum, RecursionLimit, UnsupportedUnderlyingType, ValueTypeMismatch,
    },
    Result,
};

/// Renders [`CustomAttributeArgument`] values as C# literal text
pub struct LiteralRenderer<F: TypeNameFormatter> {
    formatter: F,
    config: RenderConfig,
}

impl<F: TypeNameFormatter> LiteralRenderer<F> {
    /// Create a renderer resolving type names through `formatter`
    pub fn new(formatter: F, config: RenderConfig) -> Self {
        LiteralRenderer { formatter, config }
    }

    /// The active configuration
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// The name formatter in use
    pub fn formatter(&self) -> &F {
        &self.formatter
    }

    /// Render `value`, declared as `declared`, as seen from `scope`
    ///
    /// # Errors
    /// Returns an error if a flags enum has an unsupported underlying type, the value does not
    /// fit its declared type, arrays nest deeper than the configured limit, or the name
    /// formatter fails.
    pub fn render(
        &self,
        value: &CustomAttributeArgument,
        declared: &CilType,
        scope: &F::Scope,
    ) -> Result<String> {
        self.render_at(value, declared, scope, 0)
    }

    /// Render a value together with the type it is declared as
    ///
    /// # Errors
    /// See [`LiteralRenderer::render`].
    pub fn render_typed(
        &self,
        argument: &CustomAttributeTypedArgument,
        scope: &F::Scope,
    ) -> Result<String> {
        self.render(&argument.value, &argument.arg_type, scope)
    }

    /// The display name of `ty` as seen from `scope`
    ///
    /// # Errors
    /// Propagates failures of the name formatter.
    pub fn type_name(&self, ty: &CilType, scope: &F::Scope) -> Result<String> {
        self.formatter.scoped_name(ty, scope)
    }

    fn render_at(
        &self,
        value: &CustomAttributeArgument,
        declared: &CilType,
        scope: &F::Scope,
        depth: usize,
    ) -> Result<String> {
        match value {
            CustomAttributeArgument::Bool(flag) => Ok(flag.to_string()),
            CustomAttributeArgument::R4(float) => Ok(render_single(*float)),
            CustomAttributeArgument::R8(double) => Ok(render_double(*double)),
            CustomAttributeArgument::String(text) => Ok(format!(
                "\"{}\"",
                escape_string(text, &self.config.allowed_chars)
            )),
            CustomAttributeArgument::Char(c) => render_char(*c),
            CustomAttributeArgument::Type(ty) => {
                Ok(format!("typeof({})", self.type_name(ty, scope)?))
            }
            CustomAttributeArgument::Array(items) => {
                self.render_array(items, declared, scope, depth)
            }
            CustomAttributeArgument::Enum(enum_type, payload) => {
                if !enum_type.is_enum() {
                    return Err(NotAnEnum(enum_type.fullname()));
                }
                self.render_enum(enum_type, payload, scope)
            }
            CustomAttributeArgument::Null => {
                if declared.is_value_type() || declared.is_generic_parameter() {
                    Ok("default".to_string())
                } else {
                    Ok("null".to_string())
                }
            }
            CustomAttributeArgument::I1(int) => {
                self.render_integer(&CilPrimitiveData::I1(*int), declared, scope)
            }
            CustomAttributeArgument::U1(int) => {
                self.render_integer(&CilPrimitiveData::U1(*int), declared, scope)
            }
            CustomAttributeArgument::I2(int) => {
                self.render_integer(&CilPrimitiveData::I2(*int), declared, scope)
            }
            CustomAttributeArgument::U2(int) => {
                self.render_integer(&CilPrimitiveData::U2(*int), declared, scope)
            }
            CustomAttributeArgument::I4(int) => {
                self.render_integer(&CilPrimitiveData::I4(*int), declared, scope)
            }
            CustomAttributeArgument::U4(int) => {
                self.render_integer(&CilPrimitiveData::U4(*int), declared, scope)
            }
            CustomAttributeArgument::I8(int) => {
                self.render_integer(&CilPrimitiveData::I8(*int), declared, scope)
            }
            CustomAttributeArgument::U8(int) => {
                self.render_integer(&CilPrimitiveData::U8(*int), declared, scope)
            }
        }
    }

    fn render_integer(
        &self,
        payload: &CilPrimitiveData,
        declared: &CilType,
        scope: &F::Scope,
    ) -> Result<String> {
        if declared.is_enum() {
            self.render_enum(declared, payload, scope)
        } else {
            Ok(payload.to_string())
        }
    }

    fn render_array(
        &self,
        items: &[CustomAttributeArgument],
        declared: &CilType,
        scope: &F::Scope,
        depth: usize,
    ) -> Result<String> {
        if depth >= self.config.max_depth {
            return Err(RecursionLimit(self.config.max_depth));
        }

        if !declared.is_array() {
            return Err(ValueTypeMismatch(format!(
                "Array value declared as non-array type {}",
                declared.fullname()
            )));
        }

        let element = declared.element_type().ok_or_else(|| {
            NameResolution(format!(
                "Element type of {} is not available",
                declared.fullname()
            ))
        })?;

        let mut text = format!("new {}[{}]", self.type_name(&element, scope)?, items.len());
        if !items.is_empty() {
            let rendered = items
                .iter()
                .map(|item| self.render_at(item, &element, scope, depth + 1))
                .collect::<Result<Vec<_>>>()?;
            text.push_str(" { ");
            text.push_str(&rendered.join(", "));
            text.push_str(" }");
        }
        Ok(text)
    }

    fn render_enum(
        &self,
        enum_type: &CilType,
        payload: &CilPrimitiveData,
        scope: &F::Scope,
    ) -> Result<String> {
        let type_name = self.type_name(enum_type, scope)?;

        let members = if enum_type.is_flags() {
            decompose_flags(enum_type, payload)?
        } else {
            enum_type.enum_member_by_value(payload).into_iter().collect()
        };

        if members.is_empty() {
            log::debug!(
                "No member of {} matches {}, rendering a cast",
                enum_type.fullname(),
                payload
            );
            return Ok(format!("({type_name}) {payload}"));
        }

        Ok(members
            .iter()
            .map(|member| {
                let member = to_identifier(member, false, &self.config.allowed_chars);
                format!("{type_name}.{member}")
            })
            .collect::<Vec<_>>()
            .join(" | "))
    }
}

/// The flag members contained in `payload`, in declaration order
///
/// The bit test runs in a 64-bit accumulator whose signedness follows the enum's underlying
/// type.
fn decompose_flags(enum_type: &CilType, payload: &CilPrimitiveData) -> Result<Vec<String>> {
    let underlying = enum_type
        .enum_underlying()
        .map_or_else(|| payload.flavor(), |ty| ty.flavor.clone());
    let members = enum_type.enum_members.iter().map(|(_, member)| member);

    let selected = if underlying.is_unsigned_integer() {
        let value = payload.widen_unsigned();
        members
            .filter(|member| contains_bits(value, member.value.widen_unsigned()))
            .map(|member| member.name.clone())
            .collect()
    } else if underlying.is_signed_integer() {
        let value = payload.widen_signed();
        members
            .filter(|member| contains_bits(value, member.value.widen_signed()))
            .map(|member| member.name.clone())
            .collect()
    } else {
        return Err(UnsupportedUnderlyingType(enum_type.fullname()));
    };
    Ok(selected)
}

/// A zero-valued member only matches a zero value
fn contains_bits<T>(value: T, bits: T) -> bool
where
    T: Copy + Default + PartialEq + BitAnd<Output = T>,
{
    if bits == T::default() {
        value == T::default()
    } else {
        value & bits == bits
    }
}

fn render_single(value: f32) -> String {
    if value.is_nan() {
        "0F / 0F".to_string()
    } else if value == f32::INFINITY {
        "1F / 0F".to_string()
    } else if value == f32::NEG_INFINITY {
        "-1F / 0F".to_string()
    } else {
        format!("{value}f")
    }
}

fn render_double(value: f64) -> String {
    if value.is_nan() {
        "0D / 0D".to_string()
    } else if value == f64::INFINITY {
        "1D / 0D".to_string()
    } else if value == f64::NEG_INFINITY {
        "-1D / 0D".to_string()
    } else {
        format!("{value}")
    }
}

fn render_char(c: char) -> Result<String> {
    match c {
        '\'' => Ok("'\\''".to_string()),
        '\\' => Ok("'\\\\'".to_string()),
        c if is_printable_ascii(c) => Ok(format!("'{c}'")),
        c => {
            let code = u16::try_from(u32::from(c)).map_err(|_| {
                ValueTypeMismatch(format!("Character U+{:X} does not fit a char", u32::from(c)))
            })?;
            Ok(format!("'\\x{code:04x}'"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::{
        metadata::typesystem::{
            CSharpNameFormatter, CilPrimitiveKind, NamespaceScope, TypeBuilder, TypeRegistry,
        },
        test::{create_enum, create_flags_enum, create_registry},
        Error,
    };

    fn renderer() -> LiteralRenderer<CSharpNameFormatter> {
        LiteralRenderer::new(CSharpNameFormatter::new(), RenderConfig::default())
    }

    fn scope() -> NamespaceScope {
        NamespaceScope::new("Tests")
    }

    fn render(
        registry: &Arc<TypeRegistry>,
        kind: CilPrimitiveKind,
        value: CustomAttributeArgument,
    ) -> String {
        let declared = registry.get_primitive(kind).unwrap();
        renderer().render(&value, &declared, &scope()).unwrap()
    }

    #[test]
    fn test_scalars() {
        let registry = create_registry();
        use CustomAttributeArgument as A;
        use CilPrimitiveKind as K;

        assert_eq!(render(&registry, K::Boolean, A::Bool(true)), "true");
        assert_eq!(render(&registry, K::Boolean, A::Bool(false)), "false");
        assert_eq!(render(&registry, K::I4, A::I4(-42)), "-42");
        assert_eq!(render(&registry, K::U8, A::U8(u64::MAX)), "18446744073709551615");
        assert_eq!(render(&registry, K::I8, A::I8(i64::MIN)), "-9223372036854775808");
        assert_eq!(render(&registry, K::U1, A::U1(255)), "255");
        assert_eq!(render(&registry, K::String, A::String(String::new())), "\"\"");
        assert_eq!(
            render(&registry, K::String, A::String("say \"hi\"\n".to_string())),
            "\"say \\\"hi\\\"\\n\""
        );
    }

    #[test]
    fn test_floats() {
        let registry = create_registry();
        use CustomAttributeArgument as A;
        use CilPrimitiveKind as K;

        assert_eq!(render(&registry, K::R4, A::R4(1.5)), "1.5f");
        assert_eq!(render(&registry, K::R4, A::R4(1.0)), "1f");
        assert_eq!(render(&registry, K::R4, A::R4(1e20)), "100000000000000000000f");
        assert_eq!(render(&registry, K::R8, A::R8(0.1)), "0.1");
        assert_eq!(render(&registry, K::R8, A::R8(-2.5)), "-2.5");

        assert_eq!(render(&registry, K::R4, A::R4(f32::INFINITY)), "1F / 0F");
        assert_eq!(render(&registry, K::R4, A::R4(f32::NEG_INFINITY)), "-1F / 0F");
        assert_eq!(render(&registry, K::R4, A::R4(f32::NAN)), "0F / 0F");
        assert_eq!(render(&registry, K::R8, A::R8(f64::INFINITY)), "1D / 0D");
        assert_eq!(render(&registry, K::R8, A::R8(f64::NEG_INFINITY)), "-1D / 0D");
        assert_eq!(render(&registry, K::R8, A::R8(f64::NAN)), "0D / 0D");
    }

    #[test]
    fn test_chars() {
        let registry = create_registry();
        use CustomAttributeArgument as A;
        use CilPrimitiveKind as K;

        assert_eq!(render(&registry, K::Char, A::Char('a')), "'a'");
        assert_eq!(render(&registry, K::Char, A::Char(' ')), "' '");
        assert_eq!(render(&registry, K::Char, A::Char('\t')), "'\\x0009'");
        assert_eq!(render(&registry, K::Char, A::Char('\u{FFFF}')), "'\\xffff'");
        assert_eq!(render(&registry, K::Char, A::Char('\'')), "'\\''");
        assert_eq!(render(&registry, K::Char, A::Char('\\')), "'\\\\'");

        let declared = registry.get_primitive(K::Char).unwrap();
        let result = renderer().render(&A::Char('\u{1F600}'), &declared, &scope());
        assert!(matches!(result, Err(Error::ValueTypeMismatch(_))));
    }

    #[test]
    fn test_null() {
        let registry = create_registry();
        let renderer = renderer();
        let null = CustomAttributeArgument::Null;

        let string_type = registry.get_primitive(CilPrimitiveKind::String).unwrap();
        assert_eq!(renderer.render(&null, &string_type, &scope()).unwrap(), "null");

        let int_type = registry.get_primitive(CilPrimitiveKind::I4).unwrap();
        assert_eq!(renderer.render(&null, &int_type, &scope()).unwrap(), "default");

        let color = create_enum(&registry, "Color", &[("Red", 0)]);
        assert_eq!(renderer.render(&null, &color, &scope()).unwrap(), "default");

        let param = TypeBuilder::new(registry.clone())
            .generic_parameter("T", 0, false)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(renderer.render(&null, &param, &scope()).unwrap(), "default");

        let object = registry.get_primitive(CilPrimitiveKind::Object).unwrap();
        assert_eq!(renderer.render(&null, &object, &scope()).unwrap(), "null");
    }

    #[test]
    fn test_null_generic_instance() {
        let registry = create_registry();
        let renderer = renderer();
        let null = CustomAttributeArgument::Null;
        let int_type = registry.get_primitive(CilPrimitiveKind::I4).unwrap();

        let pair = TypeBuilder::new(registry.clone())
            .value_type("System.Collections.Generic", "KeyValuePair`2")
            .unwrap()
            .build()
            .unwrap();
        let pair_of_int = TypeBuilder::new(registry.clone())
            .from_type(&pair)
            .generic_instance(&[int_type.clone(), int_type.clone()])
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            renderer.render(&null, &pair_of_int, &scope()).unwrap(),
            "default"
        );

        let list = TypeBuilder::new(registry.clone())
            .class("System.Collections.Generic", "List`1")
            .unwrap()
            .build()
            .unwrap();
        let list_of_int = TypeBuilder::new(registry)
            .from_type(&list)
            .generic_instance(&[int_type])
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(renderer.render(&null, &list_of_int, &scope()).unwrap(), "null");
    }

    #[test]
    fn test_typeof() {
        let registry = create_registry();
        let renderer = renderer();
        let player = TypeBuilder::new(registry.clone())
            .class("Game", "Player")
            .unwrap()
            .build()
            .unwrap();
        let type_type = TypeBuilder::new(registry.clone())
            .class("System", "Type")
            .unwrap()
            .build()
            .unwrap();

        let value = CustomAttributeArgument::Type(player);
        assert_eq!(
            renderer.render(&value, &type_type, &scope()).unwrap(),
            "typeof(Game.Player)"
        );
        assert_eq!(
            renderer
                .render(&value, &type_type, &NamespaceScope::new("Game"))
                .unwrap(),
            "typeof(Player)"
        );

        let int_type = registry.get_primitive(CilPrimitiveKind::I4).unwrap();
        assert_eq!(
            renderer
                .render(&CustomAttributeArgument::Type(int_type), &type_type, &scope())
                .unwrap(),
            "typeof(int)"
        );
    }

    #[test]
    fn test_arrays() {
        let registry = create_registry();
        let renderer = renderer();
        let int_array = TypeBuilder::new(registry.clone())
            .primitive(CilPrimitiveKind::I4)
            .unwrap()
            .array()
            .unwrap()
            .build()
            .unwrap();

        let values = CustomAttributeArgument::Array(vec![
            CustomAttributeArgument::I4(1),
            CustomAttributeArgument::I4(2),
            CustomAttributeArgument::I4(3),
        ]);
        assert_eq!(
            renderer.render(&values, &int_array, &scope()).unwrap(),
            "new int[3] { 1, 2, 3 }"
        );

        let empty = CustomAttributeArgument::Array(vec![]);
        assert_eq!(
            renderer.render(&empty, &int_array, &scope()).unwrap(),
            "new int[0]"
        );

        let color = create_enum(&registry, "Color", &[("Red", 0), ("Green", 1)]);
        let color_array = TypeBuilder::new(registry.clone())
            .from_type(&color)
            .array()
            .unwrap()
            .build()
            .unwrap();
        let colors = CustomAttributeArgument::Array(vec![
            CustomAttributeArgument::I4(1),
            CustomAttributeArgument::Enum(color.clone(), CilPrimitiveData::I4(0)),
        ]);
        assert_eq!(
            renderer.render(&colors, &color_array, &scope()).unwrap(),
            "new Color[2] { Color.Green, Color.Red }"
        );

        let object_array = TypeBuilder::new(registry.clone())
            .primitive(CilPrimitiveKind::Object)
            .unwrap()
            .array()
            .unwrap()
            .build()
            .unwrap();
        let mixed = CustomAttributeArgument::Array(vec![
            CustomAttributeArgument::String("a".to_string()),
            CustomAttributeArgument::Null,
            CustomAttributeArgument::Enum(color, CilPrimitiveData::I4(1)),
        ]);
        assert_eq!(
            renderer.render(&mixed, &object_array, &scope()).unwrap(),
            "new object[3] { \"a\", null, Color.Green }"
        );
    }

    #[test]
    fn test_array_errors() {
        let registry = create_registry();
        let int_type = registry.get_primitive(CilPrimitiveKind::I4).unwrap();
        let values = CustomAttributeArgument::Array(vec![CustomAttributeArgument::I4(1)]);

        let result = renderer().render(&values, &int_type, &scope());
        assert!(matches!(result, Err(Error::ValueTypeMismatch(_))));

        let jagged = TypeBuilder::new(registry)
            .primitive(CilPrimitiveKind::I4)
            .unwrap()
            .array()
            .unwrap()
            .array()
            .unwrap()
            .build()
            .unwrap();
        let nested = CustomAttributeArgument::Array(vec![CustomAttributeArgument::Array(vec![
            CustomAttributeArgument::I4(7),
        ])]);

        let shallow = LiteralRenderer::new(
            CSharpNameFormatter::new(),
            RenderConfig::default().with_max_depth(1),
        );
        let result = shallow.render(&nested, &jagged, &scope());
        assert!(matches!(result, Err(Error::RecursionLimit(1))));

        assert_eq!(
            renderer().render(&nested, &jagged, &scope()).unwrap(),
            "new int[][1] { new int[1] { 7 } }"
        );
    }

    #[test]
    fn test_enum_members() {
        let registry = create_registry();
        let renderer = renderer();
        let color = create_enum(&registry, "Color", &[("Red", 0), ("Green", 1), ("Blue", 2)]);

        for (value, expected) in [(0, "Color.Red"), (1, "Color.Green"), (2, "Color.Blue")] {
            let arg = CustomAttributeArgument::Enum(color.clone(), CilPrimitiveData::I4(value));
            assert_eq!(renderer.render(&arg, &color, &scope()).unwrap(), expected);
        }

        // width of the payload does not matter
        let narrow = CustomAttributeArgument::Enum(color.clone(), CilPrimitiveData::U1(2));
        assert_eq!(renderer.render(&narrow, &color, &scope()).unwrap(), "Color.Blue");

        // plain integers declared as the enum
        let plain = CustomAttributeArgument::I4(1);
        assert_eq!(renderer.render(&plain, &color, &scope()).unwrap(), "Color.Green");

        let unknown = CustomAttributeArgument::Enum(color.clone(), CilPrimitiveData::I4(7));
        assert_eq!(renderer.render(&unknown, &color, &scope()).unwrap(), "(Color) 7");

        let negative = CustomAttributeArgument::I4(-1);
        assert_eq!(renderer.render(&negative, &color, &scope()).unwrap(), "(Color) -1");
    }

    #[test]
    fn test_enum_outlives_registry() {
        let (color, color_array) = {
            let registry = create_registry();
            let color = create_enum(&registry, "Color", &[("Red", 0), ("Green", 1)]);
            let color_array = TypeBuilder::new(registry)
                .from_type(&color)
                .array()
                .unwrap()
                .build()
                .unwrap();
            (color, color_array)
        };
        let renderer = renderer();

        assert!(color.is_enum());
        let plain = CustomAttributeArgument::I4(1);
        assert_eq!(renderer.render(&plain, &color, &scope()).unwrap(), "Color.Green");
        let member = CustomAttributeArgument::Enum(color.clone(), CilPrimitiveData::I4(1));
        assert_eq!(renderer.render(&member, &color, &scope()).unwrap(), "Color.Green");

        let values = CustomAttributeArgument::Array(vec![CustomAttributeArgument::I4(0)]);
        assert_eq!(
            renderer.render(&values, &color_array, &scope()).unwrap(),
            "new Color[1] { Color.Red }"
        );
    }

    #[test]
    fn test_enum_member_names_sanitized() {
        let registry = create_registry();
        let obfuscated = create_enum(&registry, "Obf", &[("\u{1}a b", 0), ("\u{e9}t\u{e9}", 1)]);
        let first = CustomAttributeArgument::Enum(obfuscated.clone(), CilPrimitiveData::I4(0));
        let second = CustomAttributeArgument::Enum(obfuscated.clone(), CilPrimitiveData::I4(1));

        let strict = renderer();
        assert_eq!(strict.render(&first, &obfuscated, &scope()).unwrap(), "Obf.u0001a_b");
        assert_eq!(
            strict.render(&second, &obfuscated, &scope()).unwrap(),
            "Obf.u00E9tu00E9"
        );

        let relaxed = LiteralRenderer::new(
            CSharpNameFormatter::new(),
            RenderConfig::with_allowed_chars("\u{e9}"),
        );
        assert_eq!(
            relaxed.render(&second, &obfuscated, &scope()).unwrap(),
            "Obf.\u{e9}t\u{e9}"
        );
    }

    #[test]
    fn test_enum_requires_enum_type() {
        let registry = create_registry();
        let player = TypeBuilder::new(registry)
            .class("Game", "Player")
            .unwrap()
            .build()
            .unwrap();
        let arg = CustomAttributeArgument::Enum(player.clone(), CilPrimitiveData::I4(0));
        let result = renderer().render(&arg, &player, &scope());
        assert!(matches!(result, Err(Error::NotAnEnum(_))));
    }

    #[test]
    fn test_flags() {
        let registry = create_registry();
        let renderer = renderer();
        let access = create_flags_enum(
            &registry,
            "Access",
            &[("None", 0), ("Read", 1), ("Write", 2), ("Execute", 4)],
        );
        let render = |value: i32| {
            let arg = CustomAttributeArgument::Enum(access.clone(), CilPrimitiveData::I4(value));
            renderer.render(&arg, &access, &scope()).unwrap()
        };

        assert_eq!(render(0), "Access.None");
        assert_eq!(render(1), "Access.Read");
        assert_eq!(render(3), "Access.Read | Access.Write");
        assert_eq!(render(7), "Access.Read | Access.Write | Access.Execute");
        assert_eq!(render(8), "(Access) 8");
        assert_eq!(render(9), "Access.Read");
    }

    #[test]
    fn test_flags_law() {
        let registry = create_registry();
        let renderer = renderer();
        let members = [("A", 1), ("B", 2), ("C", 4), ("D", 8), ("E", 16)];
        let flags = create_flags_enum(&registry, "Bits", &members);

        for subset in 1u32..(1 << members.len()) {
            let chosen: Vec<&(&str, i32)> = members
                .iter()
                .enumerate()
                .filter(|(i, _)| subset & (1 << i) != 0)
                .map(|(_, member)| member)
                .collect();
            let value = chosen.iter().fold(0, |acc, (_, bits)| acc | bits);
            let expected = chosen
                .iter()
                .map(|(name, _)| format!("Bits.{name}"))
                .collect::<Vec<_>>()
                .join(" | ");

            let arg = CustomAttributeArgument::Enum(flags.clone(), CilPrimitiveData::I4(value));
            assert_eq!(renderer.render(&arg, &flags, &scope()).unwrap(), expected);
        }
    }

    #[test]
    fn test_flags_widening() {
        let registry = create_registry();
        let renderer = renderer();

        let wide = TypeBuilder::new(registry.clone())
            .enum_type("Tests", "Wide", CilPrimitiveKind::U8)
            .unwrap()
            .enum_member("Low", CilPrimitiveData::U8(1))
            .unwrap()
            .enum_member("High", CilPrimitiveData::U8(0x8000_0000_0000_0000))
            .unwrap()
            .flags()
            .unwrap()
            .build()
            .unwrap();
        let arg = CustomAttributeArgument::Enum(wide.clone(), CilPrimitiveData::U8(u64::MAX));
        assert_eq!(
            renderer.render(&arg, &wide, &scope()).unwrap(),
            "Wide.Low | Wide.High"
        );

        // signed: -1 sets every bit, members stored with a narrower width still match
        let signed = TypeBuilder::new(registry.clone())
            .enum_type("Tests", "Signed", CilPrimitiveKind::I2)
            .unwrap()
            .enum_member("Sign", CilPrimitiveData::I2(i16::MIN))
            .unwrap()
            .enum_member("One", CilPrimitiveData::I1(1))
            .unwrap()
            .flags()
            .unwrap()
            .build()
            .unwrap();
        let arg = CustomAttributeArgument::Enum(signed.clone(), CilPrimitiveData::I2(-1));
        assert_eq!(
            renderer.render(&arg, &signed, &scope()).unwrap(),
            "Signed.Sign | Signed.One"
        );
        let arg = CustomAttributeArgument::Enum(signed.clone(), CilPrimitiveData::I2(1));
        assert_eq!(renderer.render(&arg, &signed, &scope()).unwrap(), "Signed.One");
    }

    #[test]
    fn test_flags_unsupported_underlying() {
        let registry = create_registry();
        let odd = TypeBuilder::new(registry)
            .enum_type("Tests", "Odd", CilPrimitiveKind::Boolean)
            .unwrap()
            .enum_member("Yes", CilPrimitiveData::Boolean(true))
            .unwrap()
            .flags()
            .unwrap()
            .build()
            .unwrap();
        let arg = CustomAttributeArgument::Enum(odd.clone(), CilPrimitiveData::Boolean(true));
        let result = renderer().render(&arg, &odd, &scope());
        assert!(
            matches!(result, Err(Error::UnsupportedUnderlyingType(name)) if name == "Tests.Odd")
        );
    }

    #[test]
    fn test_allowed_chars() {
        let registry = create_registry();
        let string_type = registry.get_primitive(CilPrimitiveKind::String).unwrap();
        let value = CustomAttributeArgument::String("héllo".to_string());

        assert_eq!(
            renderer().render(&value, &string_type, &scope()).unwrap(),
            "\"h\\u00E9llo\""
        );

        let relaxed = LiteralRenderer::new(
            CSharpNameFormatter::new(),
            RenderConfig::with_allowed_chars("é"),
        );
        assert_eq!(
            relaxed.render(&value, &string_type, &scope()).unwrap(),
            "\"héllo\""
        );
    }
}
