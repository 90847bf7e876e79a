//! Ordered artifact writer
//!
//! Artifacts are processed strictly in the order given. A conflict on one
//! artifact aborts the pass; artifacts before it stay written and remain
//! listed in [`WritePlanner::manifest`].

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::resource::GeneratedArtifact;
use crate::error::{Result, ScaffoldError};

/// Flags controlling a write pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Overwrite existing files
    pub force: bool,
    /// Record what would be written without touching the filesystem
    pub dry_run: bool,
}

/// Writes artifacts and records what happened
#[derive(Debug, Default)]
pub struct WritePlanner {
    options: WriteOptions,
    manifest: Vec<PathBuf>,
    planned: Vec<PathBuf>,
}

impl WritePlanner {
    pub fn new(options: WriteOptions) -> Self {
        WritePlanner {
            options,
            ..Default::default()
        }
    }

    /// Paths written so far, in creation order
    pub fn manifest(&self) -> &[PathBuf] {
        &self.manifest
    }

    /// Paths a dry run would have written, in order
    pub fn planned(&self) -> &[PathBuf] {
        &self.planned
    }

    /// Process `artifacts` in order
    ///
    /// # Errors
    ///
    /// Stops at the first existing destination when `force` is off and
    /// returns [`ScaffoldError::ArtifactConflict`]; I/O failures are returned
    /// as [`ScaffoldError::Io`].
    pub fn write_all(&mut self, artifacts: &[GeneratedArtifact]) -> Result<()> {
        self.write_each(artifacts, |_| {})
    }

    /// Like [`write_all`](Self::write_all), calling `on_done` with each path
    /// as soon as it is written (or planned, in a dry run)
    pub fn write_each<F>(&mut self, artifacts: &[GeneratedArtifact], mut on_done: F) -> Result<()>
    where
        F: FnMut(&Path),
    {
        for artifact in artifacts {
            self.write_one(artifact)?;
            on_done(&artifact.target_path);
        }
        Ok(())
    }

    fn write_one(&mut self, artifact: &GeneratedArtifact) -> Result<()> {
        let path = &artifact.target_path;
        if self.options.dry_run {
            debug!(path = %path.display(), "dry run, not writing");
            self.planned.push(path.clone());
            return Ok(());
        }
        if path.exists() && !self.options.force {
            return Err(ScaffoldError::ArtifactConflict { path: path.clone() });
        }
        ensure_parent(path)?;
        fs::write(path, &artifact.content).map_err(|e| ScaffoldError::io(path, e))?;
        info!(path = %path.display(), bytes = artifact.content.len(), "wrote artifact");
        self.manifest.push(path.clone());
        Ok(())
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| ScaffoldError::io(parent, e))
        }
        _ => Ok(()),
    }
}
