use std::path::PathBuf;

use anyhow::Result;

/// Receives the serialized tally. `Ok(None)` means the user backed out and
/// nothing was written.
pub trait DownloadSink {
    fn deliver(&self, content: &str, file_name: &str) -> Result<Option<PathBuf>>;
}
