use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::usecase::ports::download::DownloadSink;

pub fn write_text_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create parent dir: {}", parent.display()))?;
    }
    std::fs::write(path, content.as_bytes())
        .with_context(|| format!("failed to write export: {}", path.display()))
}

/// Writes exports straight into a fixed directory.
pub struct FileSink {
    pub dir: PathBuf,
}

impl DownloadSink for FileSink {
    fn deliver(&self, content: &str, file_name: &str) -> Result<Option<PathBuf>> {
        let path = self.dir.join(file_name);
        write_text_file(&path, content)?;
        Ok(Some(path))
    }
}
