use std::path::PathBuf;

use anyhow::Result;
use rfd::FileDialog;

use crate::infra::export::text_file::FileSink;
use crate::usecase::ports::download::DownloadSink;

pub struct SaveDialogSink {
    pub start_dir: Option<PathBuf>,
}

impl DownloadSink for SaveDialogSink {
    fn deliver(&self, content: &str, file_name: &str) -> Result<Option<PathBuf>> {
        let mut dialog = FileDialog::new()
            .set_title("Enregistrer les comptages")
            .set_file_name(file_name)
            .add_filter("Texte", &["txt"]);
        if let Some(dir) = &self.start_dir {
            dialog = dialog.set_directory(dir);
        }

        let Some(path) = dialog.save_file() else {
            return Ok(None);
        };

        let dir = path.parent().map(PathBuf::from).unwrap_or_default();
        let chosen_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(file_name);
        FileSink { dir }.deliver(content, chosen_name)
    }
}
