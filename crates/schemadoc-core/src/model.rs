//! Canonical field tree produced by extraction and consumed by themes
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Closed set of field kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
    Enum,
    Date,
    Union,
    DiscriminatedUnion,
    Record,
    Tuple,
    Any,
}

impl FieldKind {
    /// Stable label used in generated prose and diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
            FieldKind::Object => "object",
            FieldKind::Array => "array",
            FieldKind::Enum => "enum",
            FieldKind::Date => "date",
            FieldKind::Union => "union",
            FieldKind::DiscriminatedUnion => "discriminated-union",
            FieldKind::Record => "record",
            FieldKind::Tuple => "tuple",
            FieldKind::Any => "any",
        }
    }

    /// Scalar kinds carry no nested structure
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            FieldKind::String
                | FieldKind::Number
                | FieldKind::Integer
                | FieldKind::Boolean
                | FieldKind::Date
                | FieldKind::Any
        )
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A nested type position: either a bare kind or a fully extracted field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypeRef {
    Kind(FieldKind),
    Field(Box<Field>),
}

impl TypeRef {
    pub fn kind(&self) -> FieldKind {
        match self {
            TypeRef::Kind(kind) => *kind,
            TypeRef::Field(field) => field.kind(),
        }
    }

    pub fn as_field(&self) -> Option<&Field> {
        match self {
            TypeRef::Field(field) => Some(field),
            TypeRef::Kind(_) => None,
        }
    }
}

impl From<Field> for TypeRef {
    fn from(field: Field) -> Self {
        TypeRef::Field(Box::new(field))
    }
}

/// One branch of a discriminated union
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnionVariant {
    /// Literal tag value selecting this branch
    pub discriminator_value: String,
    /// Object fields of the branch, tag field included
    pub fields: Vec<Field>,
}

/// Kind-specific payload of a field; exactly one is present per field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FieldType {
    String,
    Number,
    Integer,
    Boolean,
    Date,
    Any,
    Enum {
        values: Vec<String>,
    },
    Object {
        fields: Vec<Field>,
    },
    Array {
        item: TypeRef,
    },
    Tuple {
        items: Vec<TypeRef>,
    },
    Record {
        key: FieldKind,
        value: TypeRef,
    },
    Union {
        types: Vec<TypeRef>,
        /// Coarse per-branch labels, used for generated prose
        type_names: Vec<String>,
    },
    DiscriminatedUnion {
        variants: Vec<UnionVariant>,
    },
}

impl FieldType {
    /// Payload for `kind` with no nested structure expanded
    pub fn bare(kind: FieldKind) -> Self {
        match kind {
            FieldKind::String => FieldType::String,
            FieldKind::Number => FieldType::Number,
            FieldKind::Integer => FieldType::Integer,
            FieldKind::Boolean => FieldType::Boolean,
            FieldKind::Date => FieldType::Date,
            FieldKind::Any => FieldType::Any,
            FieldKind::Enum => FieldType::Enum { values: Vec::new() },
            FieldKind::Object => FieldType::Object { fields: Vec::new() },
            FieldKind::Array => FieldType::Array {
                item: TypeRef::Kind(FieldKind::Any),
            },
            FieldKind::Tuple => FieldType::Tuple { items: Vec::new() },
            FieldKind::Record => FieldType::Record {
                key: FieldKind::String,
                value: TypeRef::Kind(FieldKind::Any),
            },
            FieldKind::Union => FieldType::Union {
                types: Vec::new(),
                type_names: Vec::new(),
            },
            FieldKind::DiscriminatedUnion => FieldType::DiscriminatedUnion {
                variants: Vec::new(),
            },
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldType::String => FieldKind::String,
            FieldType::Number => FieldKind::Number,
            FieldType::Integer => FieldKind::Integer,
            FieldType::Boolean => FieldKind::Boolean,
            FieldType::Date => FieldKind::Date,
            FieldType::Any => FieldKind::Any,
            FieldType::Enum { .. } => FieldKind::Enum,
            FieldType::Object { .. } => FieldKind::Object,
            FieldType::Array { .. } => FieldKind::Array,
            FieldType::Tuple { .. } => FieldKind::Tuple,
            FieldType::Record { .. } => FieldKind::Record,
            FieldType::Union { .. } => FieldKind::Union,
            FieldType::DiscriminatedUnion { .. } => FieldKind::DiscriminatedUnion,
        }
    }
}

/// Validation keywords surfaced as constraints, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ConstraintKind {
    MinLength,
    MaxLength,
    Pattern,
    Format,
    Minimum,
    Maximum,
    MinItems,
    MaxItems,
}

impl ConstraintKind {
    pub const ALL: [ConstraintKind; 8] = [
        ConstraintKind::MinLength,
        ConstraintKind::MaxLength,
        ConstraintKind::Pattern,
        ConstraintKind::Format,
        ConstraintKind::Minimum,
        ConstraintKind::Maximum,
        ConstraintKind::MinItems,
        ConstraintKind::MaxItems,
    ];

    /// JSON-Schema keyword this constraint is read from
    pub fn keyword(&self) -> &'static str {
        match self {
            ConstraintKind::MinLength => "minLength",
            ConstraintKind::MaxLength => "maxLength",
            ConstraintKind::Pattern => "pattern",
            ConstraintKind::Format => "format",
            ConstraintKind::Minimum => "minimum",
            ConstraintKind::Maximum => "maximum",
            ConstraintKind::MinItems => "minItems",
            ConstraintKind::MaxItems => "maxItems",
        }
    }
}

/// A display-ready validation constraint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Constraint {
    pub kind: ConstraintKind,
    pub value: Value,
    pub display: String,
}

/// An example value, either valid or deliberately invalid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Example {
    pub value: Value,
    pub is_correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// One node of the extracted documentation tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub is_required: bool,
    pub is_nullable: bool,
    /// Tag property name: the field's own name for literal tag fields,
    /// the tag property for discriminated unions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<Constraint>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Example>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
}

impl Field {
    /// Create a field with no metadata
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            is_required: false,
            is_nullable: false,
            discriminator: None,
            description: None,
            constraints: Vec::new(),
            examples: Vec::new(),
            default_value: None,
        }
    }

    pub fn kind(&self) -> FieldKind {
        self.field_type.kind()
    }

    /// Whether this field carries a non-empty tag marker
    pub fn is_discriminator_tagged(&self) -> bool {
        self.discriminator.as_deref().is_some_and(|tag| !tag.is_empty())
    }

    /// Whether this field is a literal tag field (as opposed to a union carrying a tag)
    pub fn is_tag_field(&self) -> bool {
        self.discriminator.as_deref() == Some(self.name.as_str())
            && matches!(self.field_type, FieldType::Enum { .. })
    }

    pub fn object_fields(&self) -> Option<&[Field]> {
        match &self.field_type {
            FieldType::Object { fields } => Some(fields),
            _ => None,
        }
    }

    pub fn enum_values(&self) -> Option<&[String]> {
        match &self.field_type {
            FieldType::Enum { values } => Some(values),
            _ => None,
        }
    }

    pub fn correct_examples(&self) -> impl Iterator<Item = &Example> {
        self.examples.iter().filter(|example| example.is_correct)
    }

    pub fn invalid_examples(&self) -> impl Iterator<Item = &Example> {
        self.examples.iter().filter(|example| !example.is_correct)
    }
}

/// Document-level metadata copied from the schema root
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModelMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Value>,
}

/// Root container of an extracted field tree
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SchemaModel {
    pub fields: Vec<Field>,
    pub metadata: ModelMetadata,
}

impl SchemaModel {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The synthetic root field, when the document root was not an object
    pub fn root_field(&self) -> Option<&Field> {
        match self.fields.as_slice() {
            [field] if field.name == "root" => Some(field),
            _ => None,
        }
    }
}
