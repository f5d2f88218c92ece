pub mod download;
pub mod workbook;
