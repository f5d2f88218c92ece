use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use crate::domain::entities::tally::Tally;
use crate::usecase::ports::download::DownloadSink;

pub const DEFAULT_EXPORT_FILE_NAME: &str = "reference_counts.txt";

/// `key<TAB>count` per entry, newline separated, no trailing newline.
pub fn serialize_tally(tally: &Tally) -> String {
    tally
        .iter()
        .map(|(key, count)| format!("{key}\t{count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub struct ExportService {
    sink: Arc<dyn DownloadSink>,
    file_name: String,
}

impl ExportService {
    pub fn new(sink: Arc<dyn DownloadSink>, file_name: impl Into<String>) -> Self {
        Self {
            sink,
            file_name: file_name.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn export(&self, content: &str) -> Result<Option<PathBuf>> {
        let saved = self.sink.deliver(content, &self.file_name)?;
        match &saved {
            Some(path) => log::info!("exported tally to {}", path.display()),
            None => log::info!("tally export cancelled"),
        }
        Ok(saved)
    }
}
