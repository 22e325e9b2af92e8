//! Inline markdown for type references and constant values.
//!
//! Named types render as same-document links (`[Name](#Name)`), which resolve to the heading
//! of the type's own section.
//!
//! Map types and map constants only show their value type: `map<string, i32>` renders as
//! `map<i32>`.

use crate::schema::{ConstValue, FieldType};

/// Anchor link to a declaration in the same document.
pub fn cross_reference(name: &str) -> String {
    format!("[{name}](#{name})")
}

/// Render a type reference.
pub fn format_type(field_type: &FieldType) -> String {
    match field_type {
        FieldType::VoidKeyword => "void".to_string(),
        FieldType::ListType { value_type } => format!("list<{}>", format_type(value_type)),
        FieldType::SetType { value_type } => format!("set<{}>", format_type(value_type)),
        FieldType::MapType { value_type, .. } => format!("map<{}>", format_type(value_type)),
        FieldType::StringKeyword => "string".to_string(),
        FieldType::BinaryKeyword => "binary".to_string(),
        FieldType::BoolKeyword => "bool".to_string(),
        FieldType::ByteKeyword => "byte".to_string(),
        FieldType::DoubleKeyword => "double".to_string(),
        FieldType::EnumKeyword => "enum".to_string(),
        FieldType::I8Keyword => "i8".to_string(),
        FieldType::I16Keyword => "i16".to_string(),
        FieldType::I32Keyword => "i32".to_string(),
        FieldType::I64Keyword => "i64".to_string(),
        FieldType::Identifier { value } => cross_reference(value),
    }
}

/// Render a scalar literal.
///
/// Strings are quoted, hex values get a `#` prefix, other scalars render as written.
/// Numeric constant wrappers render their inner literal. Identifiers become links. Lists and
/// maps go through [`format_const`] without a declared type.
pub fn format_literal(value: &ConstValue) -> String {
    match value {
        ConstValue::StringLiteral { value } => format!("\"{value}\""),
        ConstValue::BooleanLiteral { value } => value.to_string(),
        ConstValue::IntegerLiteral { value }
        | ConstValue::FloatLiteral { value }
        | ConstValue::ExponentialLiteral { value } => value.clone(),
        ConstValue::HexLiteral { value } => format!("#{value}"),
        ConstValue::IntConstant { value } | ConstValue::DoubleConstant { value } => {
            format_literal(value)
        }
        ConstValue::ConstList { .. } | ConstValue::ConstMap { .. } => format_const(value, None),
        ConstValue::Identifier { value } => cross_reference(value),
    }
}

/// Render a constant value, using its declared type for maps.
///
/// Lists render their element values comma-joined (`list<a,b>`), string elements unquoted.
/// Maps render `map<V>` where `V` is the declared value type; without a map type to go on the
/// declared type itself stands in, and with no type at all the brackets stay empty.
pub fn format_const(value: &ConstValue, declared: Option<&FieldType>) -> String {
    match value {
        ConstValue::ConstList { elements } => {
            let members: Vec<String> = elements.iter().map(list_member).collect();
            format!("list<{}>", members.join(","))
        }
        ConstValue::ConstMap { .. } => match declared {
            Some(FieldType::MapType { value_type, .. }) => {
                format!("map<{}>", format_type(value_type))
            }
            Some(other) => format!("map<{}>", format_type(other)),
            None => "map<>".to_string(),
        },
        scalar => format_literal(scalar),
    }
}

fn list_member(element: &ConstValue) -> String {
    match element {
        ConstValue::StringLiteral { value } => value.clone(),
        other => format_literal(other),
    }
}
