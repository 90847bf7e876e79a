use std::fs;
use std::path::Path;

use tracing::info;

use super::parse::parse_schema;
use super::types::SchemaTable;
use crate::error::{Result, ScaffoldError};

/// Read and parse the schema document at `path`
///
/// A missing file is reported as [`ScaffoldError::SchemaNotFound`] so the
/// caller can exit with the dedicated status; other read failures surface as
/// [`ScaffoldError::Io`].
pub fn load_schema(path: &Path) -> Result<SchemaTable> {
    if !path.is_file() {
        return Err(ScaffoldError::SchemaNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path).map_err(|e| ScaffoldError::io(path, e))?;
    let table = parse_schema(&content);
    info!(
        schema = %path.display(),
        models = table.models.len(),
        enums = table.enums.len(),
        "loaded schema"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn test_missing_schema_is_precondition_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_schema(&dir.path().join("prisma/schema.prisma")).unwrap_err();
        assert!(matches!(err, ScaffoldError::SchemaNotFound { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_load_schema_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.prisma");
        fs::write(&path, "model Post {\n  id Int @id\n  title String\n}\n").unwrap();
        let table = load_schema(&path).unwrap();
        assert_eq!(table.model_names(), vec!["Post"]);
    }
}
