//! Resource scaffolding pipeline
//!
//! ```text
//! shadpanel.toml → schema → model → ResourceIdentity → ResourceView
//!   → four artifacts → WritePlanner → navigation document
//! ```

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span};

use super::menu::{merge_menu, MenuItem, MenuOutcome};
use super::templates::{render_actions, render_create_page, render_edit_page, render_list_page};
use super::view::ResourceView;
use super::writer::{WriteOptions, WritePlanner};
use crate::config::ScaffoldConfig;
use crate::error::Result;
use crate::naming::ResourceIdentity;
use crate::resolve::resolve_model;
use crate::schema::load_schema;

/// One file to be written
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedArtifact {
    pub target_path: PathBuf,
    pub content: String,
}

/// The four files generated per resource, in write order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Actions,
    ListPage,
    CreatePage,
    EditPage,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::Actions,
        ArtifactKind::ListPage,
        ArtifactKind::CreatePage,
        ArtifactKind::EditPage,
    ];

    /// Location below the resource directory
    pub fn relative_path(self) -> PathBuf {
        match self {
            ArtifactKind::Actions => PathBuf::from("actions.ts"),
            ArtifactKind::ListPage => PathBuf::from("page.tsx"),
            ArtifactKind::CreatePage => Path::new("create").join("page.tsx"),
            ArtifactKind::EditPage => Path::new("edit").join("[id]").join("page.tsx"),
        }
    }

    fn render(self, view: &ResourceView) -> Result<String> {
        match self {
            ArtifactKind::Actions => render_actions(view),
            ArtifactKind::ListPage => render_list_page(view),
            ArtifactKind::CreatePage => render_create_page(view),
            ArtifactKind::EditPage => render_edit_page(view),
        }
    }
}

/// Render every artifact for `view` below `resource_dir`
pub fn render_artifacts(view: &ResourceView, resource_dir: &Path) -> Result<Vec<GeneratedArtifact>> {
    ArtifactKind::ALL
        .iter()
        .map(|kind| {
            Ok(GeneratedArtifact {
                target_path: resource_dir.join(kind.relative_path()),
                content: kind.render(view)?,
            })
        })
        .collect()
}

/// Everything decided before touching the project tree
#[derive(Debug, Clone)]
pub struct ResourcePlan {
    pub identity: ResourceIdentity,
    pub model_name: String,
    pub artifacts: Vec<GeneratedArtifact>,
    pub menu_item: MenuItem,
    pub menu_path: PathBuf,
    pub group_title: String,
}

impl ResourcePlan {
    /// Merge this resource's entry into the navigation document
    pub fn merge_menu(&self, dry_run: bool) -> MenuOutcome {
        merge_menu(&self.menu_path, &self.menu_item, &self.group_title, dry_run)
    }
}

/// Resolve `requested` against the project's schema and render its artifacts
///
/// # Errors
///
/// - [`ScaffoldError::SchemaNotFound`](crate::error::ScaffoldError::SchemaNotFound)
///   when the schema document is missing
/// - [`ScaffoldError::ModelNotFound`](crate::error::ScaffoldError::ModelNotFound)
///   when no model matches
/// - [`ScaffoldError::MissingIdentifier`](crate::error::ScaffoldError::MissingIdentifier)
///   when the model has nothing to route on
pub fn plan_resource(
    project_root: &Path,
    requested: &str,
    config: &ScaffoldConfig,
) -> Result<ResourcePlan> {
    let schema = load_schema(&config.schema_path(project_root))?;
    let model = resolve_model(requested, &schema)?;
    let identity = ResourceIdentity::derive(&model.name);
    debug!(?identity, "derived resource identity");

    let view = ResourceView::new(identity.clone(), model, &schema, config)?;
    let resource_dir = project_root
        .join(&config.resource.app_dir)
        .join(&identity.kebab_path);
    let artifacts = render_artifacts(&view, &resource_dir)?;

    Ok(ResourcePlan {
        menu_item: MenuItem {
            title: view.title.clone(),
            url: view.list_url.clone(),
            icon: config.menu.icon.clone(),
        },
        menu_path: config.menu_path(project_root),
        group_title: config.menu.group_title.clone(),
        model_name: model.name.clone(),
        artifacts,
        identity,
    })
}

/// Flags of one scaffolding run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScaffoldOptions {
    pub force: bool,
    pub skip_menu: bool,
    pub dry_run: bool,
}

/// What a completed run did
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub identity: ResourceIdentity,
    pub model_name: String,
    /// Written paths in creation order
    pub written: Vec<PathBuf>,
    /// Paths a dry run would write
    pub planned: Vec<PathBuf>,
    /// Navigation document the run targeted
    pub menu_path: PathBuf,
    /// `None` with `skip_menu`
    pub menu: Option<MenuOutcome>,
}

/// Progress of a run, reported as it happens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldEvent<'a> {
    /// An artifact was written
    Written(&'a Path),
    /// Dry run: the artifact would be written
    Planned(&'a Path),
}

/// Run the whole pipeline for `requested` in `project_root`
///
/// On a conflict the artifacts written before it stay on disk; use
/// [`scaffold_resource_with`] to observe them.
pub fn scaffold_resource(
    project_root: &Path,
    requested: &str,
    options: ScaffoldOptions,
) -> Result<ScaffoldReport> {
    scaffold_resource_with(project_root, requested, options, |_| {})
}

/// [`scaffold_resource`], calling `on_event` for each artifact as soon as it
/// is written or planned
///
/// Events already delivered when an error is returned describe files that
/// are on disk.
pub fn scaffold_resource_with<F>(
    project_root: &Path,
    requested: &str,
    options: ScaffoldOptions,
    mut on_event: F,
) -> Result<ScaffoldReport>
where
    F: FnMut(ScaffoldEvent<'_>),
{
    let span = info_span!("scaffold", resource = %requested, dry_run = options.dry_run);
    let _guard = span.enter();

    let config = ScaffoldConfig::load(project_root)?;
    let plan = plan_resource(project_root, requested, &config)?;

    let mut planner = WritePlanner::new(WriteOptions {
        force: options.force,
        dry_run: options.dry_run,
    });
    planner.write_each(&plan.artifacts, |path| {
        if options.dry_run {
            on_event(ScaffoldEvent::Planned(path));
        } else {
            on_event(ScaffoldEvent::Written(path));
        }
    })?;

    let menu = (!options.skip_menu).then(|| plan.merge_menu(options.dry_run));
    info!(model = %plan.model_name, written = planner.manifest().len(), "scaffolded resource");

    Ok(ScaffoldReport {
        written: planner.manifest().to_vec(),
        planned: planner.planned().to_vec(),
        menu_path: plan.menu_path,
        identity: plan.identity,
        model_name: plan.model_name,
        menu,
    })
}
