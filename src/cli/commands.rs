use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};

use crate::config::ScaffoldConfig;
use crate::error::Result;
use crate::generator::{scaffold_resource_with, MenuOutcome, ScaffoldEvent, ScaffoldOptions};
use crate::naming::ResourceIdentity;
use crate::resolve::resolve_model;
use crate::schema::{load_schema, FieldKind, ModelDefinition, SchemaTable};

/// Command-line interface for ShadPanel
///
/// Scaffolds admin-panel resources from the project's Prisma schema.
#[derive(Parser, Debug)]
#[command(name = "shadpanel")]
#[command(version, about = "ShadPanel CLI", long_about = None)]
pub struct Cli {
    /// Log level: trace, debug, info, warn, error
    #[arg(long, global = true, env = "SHADPANEL_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate list, create and edit pages plus server actions for a model
    #[command(visible_alias = "r")]
    Resource {
        /// Model or resource name (`invoice`, `invoices`, `BlogPost`)
        name: String,

        /// Overwrite existing files
        #[arg(short, long, default_value_t = false)]
        force: bool,

        /// Do not add a sidebar entry
        #[arg(long, default_value_t = false)]
        skip_menu: bool,

        /// Project root (default: current directory)
        #[arg(short, long, default_value = ".")]
        path: PathBuf,

        /// Print what would be written without touching any file
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
    /// Show how the schema's models would be scaffolded
    Inspect {
        /// Only this model (resolved like `resource`)
        model: Option<String>,

        /// Project root (default: current directory)
        #[arg(short, long, default_value = ".")]
        path: PathBuf,

        /// Emit JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

/// Execute a parsed command line
///
/// Written paths go to stdout, one per line, so the output can be piped.
///
/// # Errors
///
/// Returns the [`ScaffoldError`](crate::error::ScaffoldError) that stopped the
/// command; the binary maps it to an exit code.
pub fn run_cli(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Resource {
            name,
            force,
            skip_menu,
            path,
            dry_run,
        } => run_resource(&path, &name, force, skip_menu, dry_run),
        Commands::Inspect { model, path, json } => run_inspect(&path, model.as_deref(), json),
    }
}

fn run_resource(root: &Path, name: &str, force: bool, skip_menu: bool, dry_run: bool) -> Result<()> {
    let options = ScaffoldOptions {
        force,
        skip_menu,
        dry_run,
    };
    // paths written before a conflict are still reported
    let report = scaffold_resource_with(root, name, options, |event| match event {
        ScaffoldEvent::Written(path) => println!("{}", path.display()),
        ScaffoldEvent::Planned(path) => println!("would write: {}", path.display()),
    })?;

    match report.menu {
        Some(MenuOutcome::Planned { path, create }) => {
            let verb = if create { "create" } else { "update" };
            println!("would {verb}: {}", path.display());
        }
        Some(outcome) if outcome.changed() => println!("{}", report.menu_path.display()),
        Some(MenuOutcome::Skipped { reason }) => {
            eprintln!("Warning: navigation not updated: {reason}");
        }
        _ => {}
    }
    Ok(())
}

fn run_inspect(root: &Path, model: Option<&str>, json: bool) -> Result<()> {
    let config = ScaffoldConfig::load(root)?;
    let schema = load_schema(&config.schema_path(root))?;
    let models: Vec<&ModelDefinition> = match model {
        Some(requested) => vec![resolve_model(requested, &schema)?],
        None => schema.models.values().collect(),
    };

    if json {
        let entries: Vec<_> = models
            .iter()
            .map(|m| json!({ "model": m, "identity": ResourceIdentity::derive(&m.name) }))
            .collect();
        let value = json!({ "enums": schema.enums, "models": entries });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let blocks: Vec<String> = models
        .iter()
        .map(|m| describe_model(m, &schema, &config))
        .collect();
    print!("{}", blocks.join("\n"));
    Ok(())
}

/// Human-readable summary of one model
pub(crate) fn describe_model(
    model: &ModelDefinition,
    schema: &SchemaTable,
    config: &ScaffoldConfig,
) -> String {
    let identity = ResourceIdentity::derive(&model.name);
    let id_name = model.identifier().map(|f| f.name.as_str());
    let mut lines = vec![format!(
        "{} -> {}/{}",
        model.name,
        config.route_base(),
        identity.kebab_path
    )];

    let name_width = model.fields.iter().map(|f| f.name.len()).max().unwrap_or(0);
    let type_width = model
        .fields
        .iter()
        .map(|f| f.declared_type.len() + usize::from(!f.required))
        .max()
        .unwrap_or(0);
    for field in &model.fields {
        let ty = if field.required {
            field.declared_type.clone()
        } else {
            format!("{}?", field.declared_type)
        };
        let role = match field.kind {
            _ if Some(field.name.as_str()) == id_name => "identifier".to_string(),
            FieldKind::Scalar(_) => "scalar".to_string(),
            FieldKind::Enum => format!(
                "enum [{}]",
                schema.enum_members(&field.declared_type).join(", ")
            ),
            FieldKind::Relation => "relation".to_string(),
        };
        lines.push(format!("  {:name_width$}  {:type_width$}  {role}", field.name, ty));
    }
    if id_name.is_none() {
        lines.push("  (no identifier: cannot be scaffolded)".to_string());
    }
    lines.join("\n") + "\n"
}
