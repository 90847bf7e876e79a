//! Template-facing views of a classified model
//!
//! Everything the templates print is computed here so the templates stay
//! free of branching on schema details beyond the input kind.

use serde::Serialize;

use crate::config::ScaffoldConfig;
use crate::error::{Result, ScaffoldError};
use crate::naming::{humanize, lower_camel, ResourceIdentity};
use crate::schema::{FieldDefinition, FieldKind, ModelDefinition, ScalarType, SchemaTable};

/// Form control rendered for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InputKind {
    /// `<FormCheckbox>` for Boolean
    Checkbox,
    /// `<FormSelect>` populated from the enum members
    Select,
    /// `<FormInput numeric>` for Int, Float and Decimal
    Numeric,
    /// `<FormInput type='email'>` for text fields whose name mentions email
    Email,
    /// `<FormInput type='text'>` for everything else
    Text,
}

impl InputKind {
    pub fn for_field(field: &FieldDefinition) -> Self {
        match field.kind {
            FieldKind::Enum => InputKind::Select,
            FieldKind::Scalar(ScalarType::Boolean) => InputKind::Checkbox,
            FieldKind::Scalar(s) if s.is_numeric() => InputKind::Numeric,
            _ if field.name.to_lowercase().contains("email") => InputKind::Email,
            _ => InputKind::Text,
        }
    }

    /// Form-builder component implementing this input
    pub fn component(self) -> &'static str {
        match self {
            InputKind::Checkbox => "FormCheckbox",
            InputKind::Select => "FormSelect",
            InputKind::Numeric | InputKind::Email | InputKind::Text => "FormInput",
        }
    }
}

/// Identifier field as seen by the generated routines
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentifierView {
    pub name: String,
    pub numeric: bool,
}

impl IdentifierView {
    /// TypeScript type of the identifier parameter
    pub fn ts_type(&self) -> &'static str {
        if self.numeric {
            "number"
        } else {
            "string"
        }
    }

    /// Expression converting the `[id]` route parameter before lookup
    pub fn from_param(&self, param: &str) -> String {
        if self.numeric {
            format!("Number({param})")
        } else {
            format!("String({param})")
        }
    }
}

/// One form input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormFieldView {
    pub name: String,
    pub label: String,
    pub input: InputKind,
    /// Enum members for choice lists, empty otherwise
    pub options: Vec<String>,
    /// Type in the generated `<Pascal>Input` shape
    pub ts_type: String,
    /// Optional in the schema: `name?: T | null`
    pub optional: bool,
    /// Carries the `required` attribute
    pub required: bool,
    /// Literal used before the user touches the form
    pub initial: String,
    /// Value passed to the data-access routine on submit
    pub submit: String,
    /// Value read back from a fetched row in the edit view
    pub load: String,
}

/// One list-view column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnView {
    pub name: String,
    pub header: String,
    pub searchable: bool,
    /// Normalisation of the raw row value
    pub cell: String,
}

const SEARCH_HINTS: [&str; 3] = ["name", "title", "email"];

/// Single-quoted TypeScript string literal
pub(crate) fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Text safe to place inside a backtick template literal
fn template_text(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

/// Initial form value seeded from a literal `@default(...)`
fn initial_value(field: &FieldDefinition, input: InputKind, options: &[String]) -> String {
    let default = field.default_expression.as_deref().map(str::trim);
    match input {
        InputKind::Checkbox => match default {
            Some("true") => "true".to_string(),
            _ => "false".to_string(),
        },
        InputKind::Select => match default {
            Some(d) if options.iter().any(|m| m == d) => js_string(d),
            _ => "''".to_string(),
        },
        InputKind::Numeric => match default {
            Some(d) if d.parse::<f64>().is_ok() => d.to_string(),
            _ => "''".to_string(),
        },
        InputKind::Email | InputKind::Text => match default {
            Some(d) if d.len() >= 2 && d.starts_with('"') && d.ends_with('"') => {
                js_string(&d[1..d.len() - 1])
            }
            _ => "''".to_string(),
        },
    }
}

fn ts_type(field: &FieldDefinition, input: InputKind, options: &[String]) -> String {
    match input {
        InputKind::Checkbox => "boolean".to_string(),
        InputKind::Numeric => "number".to_string(),
        InputKind::Select if !options.is_empty() => options
            .iter()
            .map(|m| js_string(m))
            .collect::<Vec<_>>()
            .join(" | "),
        _ if field.scalar() == Some(ScalarType::Json) => "unknown".to_string(),
        _ => "string".to_string(),
    }
}

fn submit_value(field: &FieldDefinition, input: InputKind) -> String {
    let value = format!("values.{}", field.name);
    match input {
        InputKind::Checkbox => format!("Boolean({value})"),
        InputKind::Numeric if field.required => format!("Number({value})"),
        InputKind::Numeric => format!("{value} === '' || {value} == null ? null : Number({value})"),
        InputKind::Select if !field.required => format!("{value} || null"),
        _ => value,
    }
}

fn load_value(field: &FieldDefinition, input: InputKind) -> String {
    let value = format!("row.{}", field.name);
    match (input, field.scalar()) {
        (InputKind::Checkbox, _) => format!("{value} ?? false"),
        (_, Some(ScalarType::DateTime)) => {
            format!("{value} ? new Date({value}).toISOString() : ''")
        }
        _ => format!("{value} ?? ''"),
    }
}

fn cell_value(field: &FieldDefinition) -> String {
    let value = format!("r.{}", field.name);
    match field.scalar() {
        Some(ScalarType::Boolean) => format!("{value} ? 'Yes' : 'No'"),
        Some(ScalarType::DateTime) => {
            format!("{value} ? new Date({value}).toLocaleString() : ''")
        }
        _ => format!("{value} ?? ''"),
    }
}

impl FormFieldView {
    pub fn new(field: &FieldDefinition, schema: &SchemaTable) -> Self {
        let input = InputKind::for_field(field);
        let options = if input == InputKind::Select {
            schema.enum_members(&field.declared_type).to_vec()
        } else {
            Vec::new()
        };
        FormFieldView {
            name: field.name.clone(),
            label: humanize(&field.name),
            input,
            ts_type: ts_type(field, input, &options),
            optional: !field.required,
            required: field.required
                && field.default_expression.is_none()
                && input != InputKind::Checkbox,
            initial: initial_value(field, input, &options),
            submit: submit_value(field, input),
            load: load_value(field, input),
            options,
        }
    }
}

impl ColumnView {
    pub fn new(field: &FieldDefinition) -> Self {
        let lower = field.name.to_lowercase();
        ColumnView {
            name: field.name.clone(),
            header: humanize(&field.name),
            searchable: SEARCH_HINTS.iter().any(|hint| lower.contains(hint)),
            cell: cell_value(field),
        }
    }
}

/// Everything the four resource templates need
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceView {
    pub identity: ResourceIdentity,
    /// `Invoice`
    pub pascal: String,
    /// `Invoices`
    pub pascal_plural: String,
    /// Page title: `Blog Posts`
    pub title: String,
    /// Singular label: `Blog Post`
    pub noun: String,
    /// Lower-case singular label for messages: `blog post`
    pub lower_noun: String,
    /// Lower-case plural label for messages: `blog posts`
    pub lower_title: String,
    /// Schema model name: `Invoice`
    pub model_name: String,
    /// Data client delegate: `invoice`, `blogPost`
    pub delegate: String,
    pub id: IdentifierView,
    pub fields: Vec<FormFieldView>,
    pub columns: Vec<ColumnView>,
    /// `/admin/dashboard/invoices`
    pub list_url: String,
    /// `@/app/admin/dashboard/invoices/actions`
    pub actions_import: String,
    pub data_client_import: String,
    pub list_limit: u32,
}

impl ResourceView {
    /// Build the view for `model`
    ///
    /// Fails with [`ScaffoldError::MissingIdentifier`] when the model has no
    /// identifier to route on.
    pub fn new(
        identity: ResourceIdentity,
        model: &ModelDefinition,
        schema: &SchemaTable,
        config: &ScaffoldConfig,
    ) -> Result<Self> {
        let id_field = model
            .identifier()
            .ok_or_else(|| ScaffoldError::MissingIdentifier {
                model: model.name.clone(),
            })?;
        let fields = model
            .form_fields()
            .into_iter()
            .map(|f| FormFieldView::new(f, schema))
            .collect();
        let columns = model.list_columns().into_iter().map(ColumnView::new).collect();
        let list_url = format!("{}/{}", config.route_base(), identity.kebab_path);
        let actions_import = format!(
            "{}/{}/actions",
            config.app_import_prefix(),
            identity.kebab_path
        );

        let noun = identity.human_singular();
        Ok(ResourceView {
            pascal: identity.pascal_identifier.clone(),
            pascal_plural: identity.pascal_plural(),
            title: identity.human_label.clone(),
            lower_noun: noun.to_lowercase(),
            lower_title: identity.human_label.to_lowercase(),
            noun,
            delegate: lower_camel(&model.name),
            model_name: model.name.clone(),
            id: IdentifierView {
                name: id_field.name.clone(),
                numeric: model.identifier_is_numeric(),
            },
            fields,
            columns,
            list_url,
            actions_import,
            data_client_import: config.resource.data_client_import.clone(),
            list_limit: config.resource.list_limit,
            identity,
        })
    }

    /// `'/admin/dashboard/invoices'`
    pub fn list_url_literal(&self) -> String {
        js_string(&self.list_url)
    }

    /// `'/admin/dashboard/invoices/create'`
    pub fn create_url_literal(&self) -> String {
        js_string(&format!("{}/create", self.list_url))
    }

    /// Edit URL prefix for use inside a template literal
    pub fn edit_url_prefix(&self) -> String {
        template_text(&format!("{}/edit/", self.list_url))
    }

    pub fn actions_import_literal(&self) -> String {
        js_string(&self.actions_import)
    }

    pub fn data_client_literal(&self) -> String {
        js_string(&self.data_client_import)
    }

    /// `InvoiceInput`
    pub fn input_type(&self) -> String {
        format!("{}Input", self.identity.pascal_identifier)
    }

    /// Comma-separated form-builder imports used by the create and edit views
    pub fn form_imports(&self) -> String {
        let mut components = vec!["Form"];
        for kind in [InputKind::Text, InputKind::Checkbox, InputKind::Select] {
            let used = self.fields.iter().any(|f| f.input.component() == kind.component());
            if used && !components.contains(&kind.component()) {
                components.push(kind.component());
            }
        }
        components.extend(["FormSection", "FormGrid", "Button"]);
        components.join(", ")
    }
}
