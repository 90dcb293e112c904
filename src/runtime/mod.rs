//! Runtime abstraction for filesystem operations.
//!
//! The export driver only touches the filesystem through [`Runtime`], so it
//! can be tested against a mock without creating any files.

mod fs;

use anyhow::Result;
use std::path::Path;

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    /// Creates `path` and any missing parents; succeeds if it already exists.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Creates or truncates `path` and writes `contents` in full.
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.create_dir_all_impl(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        self.write_impl(path, contents)
    }
}
