use askama::Template;

use super::menu::NavigationDocument;
// `InputKind` is matched on by the create and edit views
use super::view::{InputKind, ResourceView};
use crate::error::Result;

/// Template data for `actions.ts` (server-side data access)
#[derive(Template)]
#[template(path = "resource/actions.ts.txt", syntax = "tsx", escape = "none")]
pub struct ActionsTemplate<'a> {
    pub res: &'a ResourceView,
}

/// Template data for the list view `page.tsx`
#[derive(Template)]
#[template(path = "resource/list_page.tsx.txt", syntax = "tsx", escape = "none")]
pub struct ListPageTemplate<'a> {
    pub res: &'a ResourceView,
}

/// Template data for `create/page.tsx`
#[derive(Template)]
#[template(path = "resource/create_page.tsx.txt", syntax = "tsx", escape = "none")]
pub struct CreatePageTemplate<'a> {
    pub res: &'a ResourceView,
}

/// Template data for `edit/[id]/page.tsx`
#[derive(Template)]
#[template(path = "resource/edit_page.tsx.txt", syntax = "tsx", escape = "none")]
pub struct EditPageTemplate<'a> {
    pub res: &'a ResourceView,
}

/// Template data for a freshly created navigation document
#[derive(Template)]
#[template(path = "menu.ts.txt", syntax = "tsx", escape = "none")]
pub struct MenuTemplate<'a> {
    pub doc: &'a NavigationDocument,
}

/// Render the data-access module
///
/// # Errors
///
/// Returns an error if template rendering fails
pub fn render_actions(res: &ResourceView) -> Result<String> {
    Ok(ActionsTemplate { res }.render()?)
}

/// Render the list view
///
/// # Errors
///
/// Returns an error if template rendering fails
pub fn render_list_page(res: &ResourceView) -> Result<String> {
    Ok(ListPageTemplate { res }.render()?)
}

/// Render the create view
///
/// # Errors
///
/// Returns an error if template rendering fails
pub fn render_create_page(res: &ResourceView) -> Result<String> {
    Ok(CreatePageTemplate { res }.render()?)
}

/// Render the edit view
///
/// # Errors
///
/// Returns an error if template rendering fails
pub fn render_edit_page(res: &ResourceView) -> Result<String> {
    Ok(EditPageTemplate { res }.render()?)
}

pub fn render_menu_document(doc: &NavigationDocument) -> Result<String> {
    Ok(MenuTemplate { doc }.render()?)
}
