//! Destinations for generated resources.
//!
//! A sink receives a fully serialized resource together with its path
//! relative to the generated-resources root. Implementations must either
//! publish the whole content or leave the destination untouched.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use tempfile::NamedTempFile;

/// Writable destination keyed by relative path.
pub trait ResourceSink {
    /// Stores `contents` under `relative_path`, replacing anything already there.
    fn publish(&mut self, relative_path: &Path, contents: &[u8]) -> io::Result<()>;
}

impl<S: ResourceSink + ?Sized> ResourceSink for &mut S {
    fn publish(&mut self, relative_path: &Path, contents: &[u8]) -> io::Result<()> {
        (**self).publish(relative_path, contents)
    }
}

/// Writes resources below a root directory.
///
/// Content goes to a temporary file next to the target, which is then
/// renamed over it. A failure at any point removes the temporary file and
/// leaves the previous target (if any) intact.
#[derive(Debug, Clone)]
pub struct DirSink {
    root: PathBuf,
}

impl DirSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Absolute location of `relative_path` inside this sink.
    pub fn resolve(&self, relative_path: &Path) -> io::Result<PathBuf> {
        let escapes_root = relative_path.components().any(|component| {
            !matches!(component, Component::Normal(_) | Component::CurDir)
        });
        if escapes_root {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "resource path must be relative and stay inside the root: {}",
                    relative_path.display()
                ),
            ));
        }
        Ok(self.root.join(relative_path))
    }
}

impl ResourceSink for DirSink {
    fn publish(&mut self, relative_path: &Path, contents: &[u8]) -> io::Result<()> {
        let target = self.resolve(relative_path)?;
        let parent = target.parent().unwrap_or(&self.root);
        fs::create_dir_all(parent)?;

        let mut staged = NamedTempFile::new_in(parent)?;
        staged.write_all(contents)?;
        staged.as_file().sync_all()?;
        staged.persist(&target).map_err(|e| e.error)?;

        tracing::debug!("Published {} ({} bytes)", target.display(), contents.len());
        Ok(())
    }
}

/// Keeps resources in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    resources: BTreeMap<PathBuf, Vec<u8>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, relative_path: impl AsRef<Path>) -> Option<&[u8]> {
        self.resources
            .get(relative_path.as_ref())
            .map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }
}

impl ResourceSink for MemorySink {
    fn publish(&mut self, relative_path: &Path, contents: &[u8]) -> io::Result<()> {
        self.resources
            .insert(relative_path.to_path_buf(), contents.to_vec());
        Ok(())
    }
}
