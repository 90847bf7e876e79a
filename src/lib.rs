//! # ShadPanel
//!
//! **ShadPanel** scaffolds CRUD admin-panel resources for a Next.js project
//! from its Prisma schema.
//!
//! ## Overview
//!
//! Given a model name, the generator writes four source files (server
//! actions, a list view, a create view and an edit view) and links the new
//! pages from the sidebar navigation document. Everything the files contain
//! is derived from the model's fields and the names computed from the model.
//!
//! ## Architecture
//!
//! - **[`schema`]** - Prisma schema parsing and field classification
//! - **[`naming`]** - Case and plural transformations, [`naming::ResourceIdentity`]
//! - **[`resolve`]** - Matching a user-supplied name to one model
//! - **[`generator`]** - Askama templates, ordered file writing, menu merging
//! - **[`config`]** - Optional `shadpanel.toml` at the project root
//! - **[`cli`]** - clap command surface used by the `shadpanel` binary
//! - **[`error`]** - [`error::ScaffoldError`] and its exit codes
//! - **[`logging`]** - `tracing` subscriber set-up, logs go to stderr
//!
//! ### Scaffolding Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant User
//!     participant CLI as CLI<br/>(shadpanel)
//!     participant Gen as generator::scaffold_resource_with
//!     participant Schema as schema::load_schema
//!     participant Resolve as resolve::resolve_model
//!     participant Templates as generator::templates
//!     participant Writer as generator::WritePlanner
//!     participant Menu as generator::merge_menu
//!     participant FS as File System
//!
//!     User->>CLI: shadpanel resource invoice
//!     CLI->>Gen: scaffold_resource_with("invoice", options, on_event)
//!     Gen->>Schema: load_schema("prisma/schema.prisma")
//!     Schema-->>Gen: SchemaTable
//!     Gen->>Resolve: resolve_model("invoice")
//!     Resolve-->>Gen: ModelDefinition
//!     Gen->>Templates: render actions, list, create, edit
//!     Templates-->>Gen: Vec<GeneratedArtifact>
//!     Gen->>Writer: write_each(artifacts)
//!     Writer->>FS: Write files in order, stop on conflict
//!     Gen-->>CLI: ScaffoldEvent per written path
//!     Gen->>Menu: merge_menu("config/menu.ts")
//!     Menu->>FS: Create or update the navigation document
//!     Gen-->>CLI: ScaffoldReport
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! shadpanel resource invoice --dry-run
//! shadpanel resource invoice
//! ```
//!
//! ```rust,no_run
//! use shadpanel::generator::{scaffold_resource, ScaffoldOptions};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), shadpanel::error::ScaffoldError> {
//! let report = scaffold_resource(Path::new("."), "invoice", ScaffoldOptions::default())?;
//! println!("{} files written", report.written.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod naming;
pub mod resolve;
pub mod schema;

pub use error::{Result, ScaffoldError};
