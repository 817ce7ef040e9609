use std::fs;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::GeneratorError;

pub const OUTPUT_DIR: &str = "generated";
pub const INDEX_FILE: &str = "articles.json";

/// Filesystem layout of the generated content directory.
#[derive(Debug, Clone)]
pub struct OutputStore {
    root: Utf8PathBuf,
}

impl OutputStore {
    pub fn new() -> Result<Self, GeneratorError> {
        let cwd =
            std::env::current_dir().map_err(|err| GeneratorError::Filesystem(err.to_string()))?;
        let root = Utf8PathBuf::from_path_buf(cwd.join(OUTPUT_DIR))
            .map_err(|_| GeneratorError::Filesystem("invalid output path".to_string()))?;
        Ok(Self { root })
    }

    pub fn new_with_root(root: Utf8PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Deletes the output tree and recreates it empty, so no stale file from
    /// a previous run survives. A missing tree is not an error.
    pub fn reset(&self) -> Result<(), GeneratorError> {
        match fs::remove_dir_all(self.root.as_std_path()) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(GeneratorError::Filesystem(err.to_string())),
        }
        fs::create_dir_all(self.root.as_std_path())
            .map_err(|err| GeneratorError::Filesystem(err.to_string()))
    }

    pub fn article_path(&self, slug: &str) -> Utf8PathBuf {
        self.root.join(format!("{slug}.mdx"))
    }

    pub fn index_path(&self) -> Utf8PathBuf {
        self.root.join(INDEX_FILE)
    }

    /// Create-or-truncate write of one rendered document.
    pub fn write_document(&self, path: &Utf8Path, content: &[u8]) -> Result<(), GeneratorError> {
        fs::write(path.as_std_path(), content).map_err(|err| GeneratorError::WriteDocument {
            path: path.to_owned(),
            message: err.to_string(),
        })
    }

    pub fn write_index(&self, content: &[u8]) -> Result<(), GeneratorError> {
        fs::write(self.index_path().as_std_path(), content)
            .map_err(|err| GeneratorError::Filesystem(err.to_string()))
    }
}
