use std::fmt;
use std::io;
use std::path::PathBuf;

/// Fatal scaffolding error
///
/// Every variant maps to a stable process exit code via
/// [`ScaffoldError::exit_code`]. Callers scripting around the binary should
/// treat the codes as an enumerated contract rather than raw integers.
#[derive(Debug)]
pub enum ScaffoldError {
    /// The schema document does not exist at the configured location
    ///
    /// Raised before any other work is done, so nothing has been written.
    SchemaNotFound {
        /// Path that was probed
        path: PathBuf,
    },
    /// No model in the schema matches the requested resource name
    ModelNotFound {
        /// Resource name as supplied by the caller
        requested: String,
        /// Every model name known to the schema, in declaration order
        available: Vec<String>,
    },
    /// A generated artifact already exists and `--force` was not given
    ///
    /// Artifacts earlier in the plan may already be on disk when this is
    /// raised.
    ArtifactConflict {
        /// Destination that already exists
        path: PathBuf,
    },
    /// The resolved model has neither an `@id` field nor a field named `id`
    MissingIdentifier {
        /// Model name
        model: String,
    },
    /// `shadpanel.toml` exists but could not be read or parsed
    Config {
        /// Path of the configuration file
        path: PathBuf,
        /// Parser or reader message
        message: String,
    },
    /// Filesystem failure while reading or writing a project file
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },
    /// A template failed to render
    Render(askama::Error),
    /// `inspect --json` could not serialize the schema
    Json(serde_json::Error),
}

impl ScaffoldError {
    /// Exit status used by the binary for this error
    ///
    /// `2` schema missing, `3` model not found, `4` artifact conflict,
    /// `5` missing identifier, `1` for everything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            ScaffoldError::SchemaNotFound { .. } => 2,
            ScaffoldError::ModelNotFound { .. } => 3,
            ScaffoldError::ArtifactConflict { .. } => 4,
            ScaffoldError::MissingIdentifier { .. } => 5,
            ScaffoldError::Config { .. }
            | ScaffoldError::Io { .. }
            | ScaffoldError::Render(_)
            | ScaffoldError::Json(_) => 1,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScaffoldError::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for ScaffoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaffoldError::SchemaNotFound { path } => {
                write!(f, "Prisma schema not found at {}", path.display())
            }
            ScaffoldError::ModelNotFound {
                requested,
                available,
            } => {
                write!(f, "Model for '{requested}' not found in schema.")?;
                if available.is_empty() {
                    write!(f, "\nThe schema declares no models.")
                } else {
                    write!(f, "\nAvailable models:")?;
                    for name in available {
                        write!(f, "\n  - {name}")?;
                    }
                    Ok(())
                }
            }
            ScaffoldError::ArtifactConflict { path } => {
                write!(
                    f,
                    "File exists: {} (use --force to overwrite)",
                    path.display()
                )
            }
            ScaffoldError::MissingIdentifier { model } => {
                write!(
                    f,
                    "Model '{model}' has no @id field and no field named 'id'; \
                    cannot generate edit and delete routes"
                )
            }
            ScaffoldError::Config { path, message } => {
                write!(f, "Invalid config {}: {}", path.display(), message)
            }
            ScaffoldError::Io { path, source } => {
                write!(f, "I/O error on {}: {}", path.display(), source)
            }
            ScaffoldError::Render(err) => write!(f, "Template rendering failed: {err}"),
            ScaffoldError::Json(err) => write!(f, "Failed to serialize schema: {err}"),
        }
    }
}

impl std::error::Error for ScaffoldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScaffoldError::Io { source, .. } => Some(source),
            ScaffoldError::Render(err) => Some(err),
            ScaffoldError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<askama::Error> for ScaffoldError {
    fn from(err: askama::Error) -> Self {
        ScaffoldError::Render(err)
    }
}

impl From<serde_json::Error> for ScaffoldError {
    fn from(err: serde_json::Error) -> Self {
        ScaffoldError::Json(err)
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, ScaffoldError>;
