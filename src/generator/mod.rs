//! # Generator Module
//!
//! Turns one schema model into the admin-panel pages for managing it and
//! links them from the sidebar.
//!
//! ## Architecture
//!
//! The generator uses Askama templates to produce TypeScript/React code:
//!
//! ```text
//! Model → ResourceView → Template Rendering → WritePlanner → menu.ts
//! ```
//!
//! 1. **View** ([`ResourceView`]) - Classifies every form field once: input
//!    kind, TypeScript type, initial value, submit coercion
//! 2. **Template Rendering** - Renders the four Askama templates
//! 3. **Writing** ([`WritePlanner`]) - Writes artifacts in order, stopping at
//!    the first existing file unless forced
//! 4. **Navigation** ([`merge_menu`]) - Adds a sidebar link, best effort
//!
//! ## Generated Structure
//!
//! ```text
//! app/admin/dashboard/<kebab-plural>/
//! ├── actions.ts          # Server actions: list, get, create, update, delete
//! ├── page.tsx            # Table of records
//! ├── create/
//! │   └── page.tsx        # Create form
//! └── edit/
//!     └── [id]/
//!         └── page.tsx    # Edit form, loads the record first
//! config/menu.ts          # Sidebar entry added or file created
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shadpanel::generator::{scaffold_resource, ScaffoldOptions};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), shadpanel::error::ScaffoldError> {
//! let report = scaffold_resource(Path::new("."), "invoice", ScaffoldOptions::default())?;
//! for path in &report.written {
//!     println!("{}", path.display());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Templates
//!
//! Templates live in `templates/` and use the `tsx` syntax declared in
//! `askama.toml` (`{$ expr $}` for expressions) so that JSX `{{ ... }}` is
//! passed through untouched:
//!
//! - `resource/actions.ts.txt` - Data-access module
//! - `resource/list_page.tsx.txt` - List view
//! - `resource/create_page.tsx.txt` - Create view
//! - `resource/edit_page.tsx.txt` - Edit view
//! - `menu.ts.txt` - New navigation document

mod menu;
mod resource;
mod templates;
mod view;
mod writer;

pub use menu::{merge_into, merge_menu, Merge, MenuGroup, MenuItem, MenuOutcome, NavigationDocument};
pub use resource::{
    plan_resource, render_artifacts, scaffold_resource, scaffold_resource_with, ArtifactKind,
    GeneratedArtifact, ResourcePlan, ScaffoldEvent, ScaffoldOptions, ScaffoldReport,
};
pub use templates::{
    render_actions, render_create_page, render_edit_page, render_list_page, render_menu_document,
};
pub use view::{ColumnView, FormFieldView, IdentifierView, InputKind, ResourceView};
pub use writer::{WriteOptions, WritePlanner};
