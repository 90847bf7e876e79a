//! Sidebar navigation document (`config/menu.ts`)
//!
//! New documents are rendered from a [`NavigationDocument`] tree. Existing
//! documents are edited as text: the generated entry is inserted into the
//! first group's `items` list and the icon is added to the `lucide-react`
//! import. The entry URL is the marker that makes the edit idempotent.
//!
//! Failures here never abort scaffolding; they come back as
//! [`MenuOutcome::Skipped`].

use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::templates::render_menu_document;
use super::view::js_string;
use crate::error::Result;

/// Opening of the first group's item list
#[allow(clippy::expect_used)]
static FIRST_ITEMS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)navMain\s*:\s*\[\s*\{.*?\bitems\s*:\s*\[").expect("valid menu anchor regex")
});

#[allow(clippy::expect_used)]
static ICON_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"import\s*\{([^}]*)\}\s*from\s*['"]lucide-react['"]"#)
        .expect("valid icon import regex")
});

/// One sidebar link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub title: String,
    pub url: String,
    /// `lucide-react` icon component
    pub icon: String,
}

impl MenuItem {
    /// Object literal as it appears in an `items` list, without indentation
    pub fn literal(&self) -> String {
        format!(
            "{{ title: {}, url: {}, icon: {} }},",
            js_string(&self.title),
            js_string(&self.url),
            self.icon
        )
    }

    fn marker(&self) -> Regex {
        let quoted = js_string(&self.url);
        let body = &quoted[1..quoted.len() - 1];
        // escaped input always yields a valid pattern
        #[allow(clippy::expect_used)]
        Regex::new(&format!(r#"url\s*:\s*['"]{}['"]"#, regex::escape(body)))
            .expect("escaped url pattern")
    }
}

/// Titled group of links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuGroup {
    pub title: String,
    pub items: Vec<MenuItem>,
}

impl MenuGroup {
    pub fn title_literal(&self) -> String {
        js_string(&self.title)
    }
}

/// Whole navigation document, used when none exists yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationDocument {
    pub groups: Vec<MenuGroup>,
}

impl NavigationDocument {
    /// Document holding one group with one entry
    pub fn single(group_title: &str, item: MenuItem) -> Self {
        NavigationDocument {
            groups: vec![MenuGroup {
                title: group_title.to_string(),
                items: vec![item],
            }],
        }
    }

    /// Distinct icons referenced by the document, in first-use order
    pub fn icon_imports(&self) -> String {
        let mut icons: Vec<&str> = Vec::new();
        for item in self.groups.iter().flat_map(|g| &g.items) {
            if !icons.contains(&item.icon.as_str()) {
                icons.push(&item.icon);
            }
        }
        icons.join(", ")
    }

    pub fn render(&self) -> Result<String> {
        render_menu_document(self)
    }
}

/// What happened to the navigation document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOutcome {
    Created,
    Updated,
    AlreadyPresent,
    /// Left untouched because the edit could not be made
    Skipped { reason: String },
    /// Dry run: the document would be created or updated
    Planned { path: PathBuf, create: bool },
}

impl MenuOutcome {
    /// Whether the document was written
    pub fn changed(&self) -> bool {
        matches!(self, MenuOutcome::Created | MenuOutcome::Updated)
    }
}

/// Result of merging an entry into existing text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Merge {
    AlreadyPresent,
    Merged(String),
}

/// Leading whitespace of the line containing byte offset `at`
fn indent_at(source: &str, at: usize) -> &str {
    let line_start = source[..at].rfind('\n').map_or(0, |i| i + 1);
    let line = &source[line_start..];
    let width = line.len() - line.trim_start_matches([' ', '\t']).len();
    &line[..width]
}

/// Add `icon` to the `lucide-react` import, or prepend one
fn ensure_icon_import(source: &str, icon: &str) -> String {
    if let Some(caps) = ICON_IMPORT.captures(source) {
        let Some(names) = caps.get(1) else {
            return source.to_string();
        };
        let imported = names
            .as_str()
            .split(',')
            .filter_map(|spec| spec.split_whitespace().last())
            .any(|local| local == icon);
        if imported {
            return source.to_string();
        }
        let inner = names.as_str();
        let body = inner.trim_end();
        let trailing = &inner[body.len()..];
        let body = body.trim_end_matches(',');
        let joined = if body.trim().is_empty() {
            format!(" {icon}{}", if trailing.is_empty() { " " } else { trailing })
        } else {
            format!("{body}, {icon}{trailing}")
        };
        let mut out = String::with_capacity(source.len() + icon.len() + 2);
        out.push_str(&source[..names.start()]);
        out.push_str(&joined);
        out.push_str(&source[names.end()..]);
        return out;
    }
    format!("import {{ {icon} }} from 'lucide-react'\n{source}")
}

/// Insert `item` into the first group of an existing document
///
/// Returns `Err` with a human-readable reason when the document has no
/// recognisable group list.
pub fn merge_into(source: &str, item: &MenuItem) -> std::result::Result<Merge, String> {
    if item.marker().is_match(source) {
        return Ok(Merge::AlreadyPresent);
    }
    let anchor = FIRST_ITEMS
        .find(source)
        .ok_or_else(|| "no `navMain: [ { ... items: [` list found".to_string())?;
    let items_at = anchor.start() + anchor.as_str().rfind("items").unwrap_or(0);
    let indent = format!("{}  ", indent_at(source, items_at));

    let mut entry = format!("\n{indent}{}", item.literal());
    let rest = &source[anchor.end()..];
    if rest.trim_start().starts_with(']') {
        // empty list: close it on its own line
        entry.push('\n');
        entry.push_str(&indent[..indent.len().saturating_sub(2)]);
    }
    let mut merged = String::with_capacity(source.len() + entry.len());
    merged.push_str(&source[..anchor.end()]);
    merged.push_str(&entry);
    merged.push_str(rest);

    Ok(Merge::Merged(ensure_icon_import(&merged, &item.icon)))
}

/// Bring the navigation document at `path` up to date with `item`
///
/// A missing document is created holding `group_title` with the one entry.
/// With `dry_run` the document is read but never written.
pub fn merge_menu(path: &Path, item: &MenuItem, group_title: &str, dry_run: bool) -> MenuOutcome {
    match try_merge(path, item, group_title, dry_run) {
        Ok(outcome) => outcome,
        Err(reason) => {
            warn!(path = %path.display(), %reason, "navigation document left unchanged");
            MenuOutcome::Skipped { reason }
        }
    }
}

fn try_merge(
    path: &Path,
    item: &MenuItem,
    group_title: &str,
    dry_run: bool,
) -> std::result::Result<MenuOutcome, String> {
    if !path.exists() {
        if dry_run {
            return Ok(MenuOutcome::Planned {
                path: path.to_path_buf(),
                create: true,
            });
        }
        let rendered = NavigationDocument::single(group_title, item.clone())
            .render()
            .map_err(|e| e.to_string())?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| format!("{}: {e}", parent.display()))?;
        }
        fs::write(path, rendered).map_err(|e| format!("{}: {e}", path.display()))?;
        info!(path = %path.display(), "created navigation document");
        return Ok(MenuOutcome::Created);
    }

    let source = fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
    match merge_into(&source, item)? {
        Merge::AlreadyPresent => {
            debug!(url = %item.url, "navigation entry already present");
            Ok(MenuOutcome::AlreadyPresent)
        }
        Merge::Merged(_) if dry_run => Ok(MenuOutcome::Planned {
            path: path.to_path_buf(),
            create: false,
        }),
        Merge::Merged(merged) => {
            fs::write(path, merged).map_err(|e| format!("{}: {e}", path.display()))?;
            info!(path = %path.display(), url = %item.url, "updated navigation document");
            Ok(MenuOutcome::Updated)
        }
    }
}
