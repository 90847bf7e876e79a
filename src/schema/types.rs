use indexmap::IndexMap;
use serde::Serialize;

/// Primitive Prisma field types
///
/// Anything outside this set that is not a declared enum is classified as a
/// relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScalarType {
    Int,
    String,
    Boolean,
    DateTime,
    Float,
    Decimal,
    Json,
    Bytes,
}

impl ScalarType {
    /// Parse a declared type token; `None` for anything that is not a scalar
    pub fn from_token(token: &str) -> Option<Self> {
        let ty = match token {
            "Int" => ScalarType::Int,
            "String" => ScalarType::String,
            "Boolean" => ScalarType::Boolean,
            "DateTime" => ScalarType::DateTime,
            "Float" => ScalarType::Float,
            "Decimal" => ScalarType::Decimal,
            "Json" => ScalarType::Json,
            "Bytes" => ScalarType::Bytes,
            _ => return None,
        };
        Some(ty)
    }

    /// Int, Float and Decimal render as numeric inputs
    pub fn is_numeric(self) -> bool {
        matches!(self, ScalarType::Int | ScalarType::Float | ScalarType::Decimal)
    }
}

impl std::fmt::Display for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ScalarType::Int => "Int",
            ScalarType::String => "String",
            ScalarType::Boolean => "Boolean",
            ScalarType::DateTime => "DateTime",
            ScalarType::Float => "Float",
            ScalarType::Decimal => "Decimal",
            ScalarType::Json => "Json",
            ScalarType::Bytes => "Bytes",
        };
        write!(f, "{}", s)
    }
}

/// Semantic category of a field
///
/// Exactly one variant holds for every field. `Relation` is the closed-world
/// default: a type that is neither scalar nor a known enum lands here, typos
/// included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldKind {
    Scalar(ScalarType),
    Enum,
    Relation,
}

impl FieldKind {
    /// Classify a declared type against the enum table
    pub fn classify(declared_type: &str, enums: &IndexMap<String, EnumDefinition>) -> Self {
        if let Some(scalar) = ScalarType::from_token(declared_type) {
            FieldKind::Scalar(scalar)
        } else if enums.contains_key(declared_type) {
            FieldKind::Enum
        } else {
            FieldKind::Relation
        }
    }
}

/// `enum Status { DRAFT PAID }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumDefinition {
    pub name: String,
    /// Members in declaration order
    pub members: Vec<String>,
}

/// One line of a model block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDefinition {
    pub name: String,
    /// Type token with the optional marker (`?`) stripped
    pub declared_type: String,
    /// `false` when the type carried the optional marker
    pub required: bool,
    /// Field carries `@id`
    pub is_primary_key: bool,
    /// Raw text inside `@default(...)`, unparsed
    pub default_expression: Option<String>,
    pub kind: FieldKind,
}

impl FieldDefinition {
    pub fn is_enum(&self) -> bool {
        self.kind == FieldKind::Enum
    }

    pub fn is_relation(&self) -> bool {
        self.kind == FieldKind::Relation
    }

    pub fn scalar(&self) -> Option<ScalarType> {
        match self.kind {
            FieldKind::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }
}

/// A named record type with its fields in source order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelDefinition {
    pub name: String,
    pub fields: Vec<FieldDefinition>,
}

impl ModelDefinition {
    /// The field routes and lookups are keyed by
    ///
    /// First field marked `@id`, falling back to a field literally named `id`.
    pub fn identifier(&self) -> Option<&FieldDefinition> {
        self.fields
            .iter()
            .find(|f| f.is_primary_key)
            .or_else(|| self.fields.iter().find(|f| f.name == "id"))
    }

    /// Whether route parameters must be converted to a number before lookup
    pub fn identifier_is_numeric(&self) -> bool {
        self.identifier()
            .is_some_and(|f| f.scalar() == Some(ScalarType::Int))
    }

    /// Fields that get a form input: everything except the identifier and relations
    pub fn form_fields(&self) -> Vec<&FieldDefinition> {
        let id_name = self.identifier().map(|f| f.name.as_str());
        self.fields
            .iter()
            .filter(|f| !f.is_relation() && Some(f.name.as_str()) != id_name)
            .collect()
    }

    /// Columns shown in the list view: the first two form fields
    pub fn list_columns(&self) -> Vec<&FieldDefinition> {
        self.form_fields().into_iter().take(2).collect()
    }
}

/// Parser output: enum and model tables in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchemaTable {
    pub enums: IndexMap<String, EnumDefinition>,
    pub models: IndexMap<String, ModelDefinition>,
}

impl SchemaTable {
    pub fn model_names(&self) -> Vec<String> {
        self.models.keys().cloned().collect()
    }

    pub fn enum_members(&self, name: &str) -> &[String] {
        self.enums
            .get(name)
            .map(|e| e.members.as_slice())
            .unwrap_or(&[])
    }
}
