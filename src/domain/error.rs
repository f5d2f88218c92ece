use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("no \"{sheet}\" sheet found in the workbook")]
    SheetNotFound { sheet: String },
    #[error("unable to read spreadsheet: {0}")]
    MalformedFile(String),
}
