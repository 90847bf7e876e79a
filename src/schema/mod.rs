//! # Schema Module
//!
//! Reads a Prisma schema into an in-memory table of enums and models.
//!
//! Only what scaffolding needs is understood: `enum` and `model` blocks, the
//! field name and type of each model line, the optional marker (`?`), the
//! `@id` attribute and the text inside `@default(...)`. Every other block
//! (`datasource`, `generator`, `type`, `view`) is skipped.
//!
//! ## Field classification
//!
//! Each field is tagged with exactly one [`FieldKind`]:
//!
//! - **Scalar**: one of `Int`, `String`, `Boolean`, `DateTime`, `Float`,
//!   `Decimal`, `Json`, `Bytes`
//! - **Enum**: the type names an enum declared anywhere in the file
//! - **Relation**: everything else, including list types (`Post[]`) and
//!   misspelled types
//!
//! Relations never get form inputs.

mod load;
mod parse;
mod types;

pub use load::load_schema;
pub use parse::parse_schema;
pub use types::{EnumDefinition, FieldDefinition, FieldKind, ModelDefinition, ScalarType, SchemaTable};
