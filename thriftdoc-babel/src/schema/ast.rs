//! Thrift parse tree, as handed over by the parser.
//!
//! These types are input only: the pipeline reads them and never mutates them. Their serde
//! shape follows the parser's JSON dump, with nodes tagged by `"type"` and camelCase keys.
//!
//! Declaration names arrive as `Identifier` nodes and field ids as `FieldID` nodes; both are
//! unwrapped to their value on load. Bare values are accepted too, so hand-written trees stay
//! short. Source locations (`loc`) are ignored.

use serde::{Deserialize, Deserializer};

/// A `{"type": ..., "value": ...}` node or its bare value.
#[derive(Deserialize)]
#[serde(untagged)]
enum ValueNode<T> {
    Bare(T),
    Node { value: T },
}

impl<T> ValueNode<T> {
    fn into_value(self) -> T {
        match self {
            ValueNode::Bare(value) | ValueNode::Node { value } => value,
        }
    }
}

/// Name carried by an `Identifier` (or `StringLiteral`) node.
fn identifier<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    ValueNode::deserialize(deserializer).map(ValueNode::into_value)
}

fn optional_identifier<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Option::<ValueNode<String>>::deserialize(deserializer).map(|node| node.map(ValueNode::into_value))
}

/// Numeric id carried by a `FieldID` node; `null` when the field has none.
fn field_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Option::<ValueNode<i64>>::deserialize(deserializer).map(|node| node.map(ValueNode::into_value))
}

/// Root of a parsed Thrift file.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ThriftDocument {
    #[serde(default)]
    pub body: Vec<ThriftStatement>,
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum ThriftStatement {
    NamespaceDefinition(NamespaceDefinition),
    IncludeDefinition(IncludeDefinition),
    CppIncludeDefinition(IncludeDefinition),
    TypedefDefinition(TypedefDefinition),
    ConstDefinition(ConstDefinition),
    EnumDefinition(EnumDefinition),
    StructDefinition(StructDefinition),
    UnionDefinition(StructDefinition),
    ExceptionDefinition(StructDefinition),
    ServiceDefinition(ServiceDefinition),
}

/// Discriminant of a [`ThriftStatement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Namespace,
    Include,
    CppInclude,
    Typedef,
    Const,
    Enum,
    Struct,
    Union,
    Exception,
    Service,
}

impl ThriftStatement {
    pub fn kind(&self) -> StatementKind {
        match self {
            ThriftStatement::NamespaceDefinition(_) => StatementKind::Namespace,
            ThriftStatement::IncludeDefinition(_) => StatementKind::Include,
            ThriftStatement::CppIncludeDefinition(_) => StatementKind::CppInclude,
            ThriftStatement::TypedefDefinition(_) => StatementKind::Typedef,
            ThriftStatement::ConstDefinition(_) => StatementKind::Const,
            ThriftStatement::EnumDefinition(_) => StatementKind::Enum,
            ThriftStatement::StructDefinition(_) => StatementKind::Struct,
            ThriftStatement::UnionDefinition(_) => StatementKind::Union,
            ThriftStatement::ExceptionDefinition(_) => StatementKind::Exception,
            ThriftStatement::ServiceDefinition(_) => StatementKind::Service,
        }
    }
}

impl ThriftDocument {
    pub fn new(body: Vec<ThriftStatement>) -> Self {
        ThriftDocument { body }
    }

    /// Number of top-level declarations of the given kind.
    pub fn count(&self, kind: StatementKind) -> usize {
        self.body.iter().filter(|stmt| stmt.kind() == kind).count()
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &NamespaceDefinition> {
        self.body.iter().filter_map(|stmt| match stmt {
            ThriftStatement::NamespaceDefinition(def) => Some(def),
            _ => None,
        })
    }

    pub fn typedefs(&self) -> impl Iterator<Item = &TypedefDefinition> {
        self.body.iter().filter_map(|stmt| match stmt {
            ThriftStatement::TypedefDefinition(def) => Some(def),
            _ => None,
        })
    }

    pub fn constants(&self) -> impl Iterator<Item = &ConstDefinition> {
        self.body.iter().filter_map(|stmt| match stmt {
            ThriftStatement::ConstDefinition(def) => Some(def),
            _ => None,
        })
    }

    pub fn enums(&self) -> impl Iterator<Item = &EnumDefinition> {
        self.body.iter().filter_map(|stmt| match stmt {
            ThriftStatement::EnumDefinition(def) => Some(def),
            _ => None,
        })
    }

    /// Plain `struct` declarations only; unions and exceptions are not included.
    pub fn structs(&self) -> impl Iterator<Item = &StructDefinition> {
        self.body.iter().filter_map(|stmt| match stmt {
            ThriftStatement::StructDefinition(def) => Some(def),
            _ => None,
        })
    }

    pub fn services(&self) -> impl Iterator<Item = &ServiceDefinition> {
        self.body.iter().filter_map(|stmt| match stmt {
            ThriftStatement::ServiceDefinition(def) => Some(def),
            _ => None,
        })
    }
}

/// A documentation comment attached to a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum Comment {
    /// `/* ... */` or `/** ... */`, split into segments by the parser.
    CommentBlock { value: Vec<String> },
    /// `# ...` or `// ...`
    CommentLine { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamespaceDefinition {
    #[serde(deserialize_with = "identifier")]
    pub scope: String,
    #[serde(deserialize_with = "identifier")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IncludeDefinition {
    #[serde(deserialize_with = "identifier")]
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedefDefinition {
    #[serde(deserialize_with = "identifier")]
    pub name: String,
    pub definition_type: FieldType,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstDefinition {
    #[serde(deserialize_with = "identifier")]
    pub name: String,
    pub field_type: FieldType,
    pub initializer: ConstValue,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnumDefinition {
    #[serde(deserialize_with = "identifier")]
    pub name: String,
    #[serde(default)]
    pub members: Vec<EnumMember>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnumMember {
    #[serde(deserialize_with = "identifier")]
    pub name: String,
    #[serde(default)]
    pub initializer: Option<ConstValue>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Body shared by `struct`, `union` and `exception`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StructDefinition {
    #[serde(deserialize_with = "identifier")]
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Requiredness {
    Required,
    Optional,
}

impl Requiredness {
    pub fn as_str(self) -> &'static str {
        match self {
            Requiredness::Required => "required",
            Requiredness::Optional => "optional",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    #[serde(default, rename = "fieldID", deserialize_with = "field_id")]
    pub field_id: Option<i64>,
    #[serde(deserialize_with = "identifier")]
    pub name: String,
    pub field_type: FieldType,
    #[serde(default)]
    pub requiredness: Option<Requiredness>,
    #[serde(default)]
    pub default_value: Option<ConstValue>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDefinition {
    #[serde(deserialize_with = "identifier")]
    pub name: String,
    #[serde(default, deserialize_with = "optional_identifier")]
    pub extends: Option<String>,
    #[serde(default)]
    pub functions: Vec<FunctionDefinition>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDefinition {
    #[serde(deserialize_with = "identifier")]
    pub name: String,
    pub return_type: FieldType,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
    #[serde(default)]
    pub throws: Vec<FieldDefinition>,
    #[serde(default)]
    pub oneway: bool,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// A type reference in a field, typedef, constant or function signature.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum FieldType {
    VoidKeyword,
    #[serde(rename_all = "camelCase")]
    ListType { value_type: Box<FieldType> },
    #[serde(rename_all = "camelCase")]
    SetType { value_type: Box<FieldType> },
    #[serde(rename_all = "camelCase")]
    MapType {
        key_type: Box<FieldType>,
        value_type: Box<FieldType>,
    },
    StringKeyword,
    BinaryKeyword,
    BoolKeyword,
    ByteKeyword,
    DoubleKeyword,
    EnumKeyword,
    I8Keyword,
    I16Keyword,
    I32Keyword,
    I64Keyword,
    /// Reference to a named type declared elsewhere.
    Identifier { value: String },
}

impl FieldType {
    pub fn identifier(name: impl Into<String>) -> Self {
        FieldType::Identifier { value: name.into() }
    }

    pub fn list(value_type: FieldType) -> Self {
        FieldType::ListType {
            value_type: Box::new(value_type),
        }
    }

    pub fn set(value_type: FieldType) -> Self {
        FieldType::SetType {
            value_type: Box::new(value_type),
        }
    }

    pub fn map(key_type: FieldType, value_type: FieldType) -> Self {
        FieldType::MapType {
            key_type: Box::new(key_type),
            value_type: Box::new(value_type),
        }
    }
}

/// One `key: value` pair of a constant map.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PropertyAssignment {
    pub name: ConstValue,
    pub initializer: ConstValue,
}

/// A literal or constant expression.
///
/// Numeric literals keep their source text so they render exactly as written. The parser wraps
/// every numeric literal in an `IntConstant` or `DoubleConstant` node.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum ConstValue {
    StringLiteral { value: String },
    BooleanLiteral { value: bool },
    IntegerLiteral { value: String },
    HexLiteral { value: String },
    FloatLiteral { value: String },
    ExponentialLiteral { value: String },
    /// Holds an `IntegerLiteral` or a `HexLiteral`.
    IntConstant { value: Box<ConstValue> },
    /// Holds a `FloatLiteral` or an `ExponentialLiteral`.
    DoubleConstant { value: Box<ConstValue> },
    ConstList { elements: Vec<ConstValue> },
    ConstMap { properties: Vec<PropertyAssignment> },
    /// Reference to another constant or enum member.
    Identifier { value: String },
}

impl ConstValue {
    pub fn string(value: impl Into<String>) -> Self {
        ConstValue::StringLiteral {
            value: value.into(),
        }
    }

    pub fn integer(value: impl Into<String>) -> Self {
        ConstValue::IntegerLiteral {
            value: value.into(),
        }
    }

    /// `value` wrapped the way the parser wraps integer constants.
    pub fn int_constant(value: ConstValue) -> Self {
        ConstValue::IntConstant {
            value: Box::new(value),
        }
    }

    /// `value` wrapped the way the parser wraps floating-point constants.
    pub fn double_constant(value: ConstValue) -> Self {
        ConstValue::DoubleConstant {
            value: Box::new(value),
        }
    }
}
