use anyhow::Context;
use std::path::{Path, PathBuf};

/// Directory that relative input paths are resolved against
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn resolve(&self, file_path: &Path) -> PathBuf {
        self.path.join(file_path)
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<String> {
        let file_path = self.resolve(file_path);

        if !file_path.is_file() {
            anyhow::bail!("The specified path is not a file: {:?}", file_path);
        }

        std::fs::read_to_string(&file_path)
            .with_context(|| format!("failed to read {}", file_path.display()))
    }

    pub fn read_lines(&self, file_path: &Path) -> anyhow::Result<Vec<String>> {
        Ok(self
            .read_file(file_path)?
            .lines()
            .map(|line| line.to_string())
            .collect())
    }
}
