//! Project-level scaffolding configuration
//!
//! A target project may carry a `shadpanel.toml` at its root to move the
//! schema, the generated pages or the navigation document away from the
//! layout created by the project template. Every key is optional:
//!
//! ```toml
//! [resource]
//! schema = "prisma/schema.prisma"
//! app_dir = "app/admin/dashboard"
//! route_base = "/admin/dashboard"
//! data_client_import = "@/lib/prisma"
//! list_limit = 100
//!
//! [menu]
//! path = "config/menu.ts"
//! icon = "Users"
//! group_title = "Content"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};

/// File name looked up at the project root
pub const CONFIG_FILE_NAME: &str = "shadpanel.toml";

/// Where resources are generated and how they are wired
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResourceConfig {
    /// Schema document, relative to the project root
    pub schema: PathBuf,
    /// Directory that receives one sub-directory per resource
    pub app_dir: PathBuf,
    /// URL prefix of the generated pages
    pub route_base: String,
    /// Module exporting the default data client
    pub data_client_import: String,
    /// Row limit of the generated retrieve-many routine
    pub list_limit: u32,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        ResourceConfig {
            schema: PathBuf::from("prisma").join("schema.prisma"),
            app_dir: PathBuf::from("app").join("admin").join("dashboard"),
            route_base: "/admin/dashboard".to_string(),
            data_client_import: "@/lib/prisma".to_string(),
            list_limit: 100,
        }
    }
}

/// Navigation document settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MenuConfig {
    /// Navigation document, relative to the project root
    pub path: PathBuf,
    /// `lucide-react` icon used for new entries
    pub icon: String,
    /// Title of the group created when the document does not exist
    pub group_title: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        MenuConfig {
            path: PathBuf::from("config").join("menu.ts"),
            icon: "Users".to_string(),
            group_title: "Content".to_string(),
        }
    }
}

/// Contents of `shadpanel.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaffoldConfig {
    pub resource: ResourceConfig,
    pub menu: MenuConfig,
}

impl ScaffoldConfig {
    /// Load `shadpanel.toml` from `project_root`
    ///
    /// Returns defaults when the file is absent; a present but unreadable or
    /// malformed file is an error rather than being silently ignored.
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(ScaffoldConfig::default());
        }
        let contents = fs::read_to_string(&path).map_err(|e| ScaffoldError::Config {
            path: path.clone(),
            message: e.to_string(),
        })?;
        toml::from_str(&contents).map_err(|e| ScaffoldError::Config {
            path,
            message: e.to_string(),
        })
    }

    /// Absolute location of the schema document
    pub fn schema_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.resource.schema)
    }

    /// Absolute location of the navigation document
    pub fn menu_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.menu.path)
    }

    /// `@/app/admin/dashboard`: import prefix of the generated modules
    pub fn app_import_prefix(&self) -> String {
        let segments: Vec<String> = self
            .resource
            .app_dir
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        format!("@/{}", segments.join("/"))
    }

    /// Route base without a trailing slash
    pub fn route_base(&self) -> &str {
        let trimmed = self.resource.route_base.trim_end_matches('/');
        if trimmed.is_empty() {
            ""
        } else {
            trimmed
        }
    }
}
