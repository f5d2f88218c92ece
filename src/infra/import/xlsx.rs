use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};

use crate::domain::entities::plan_row::PlanRow;
use crate::domain::error::PlanError;
use crate::usecase::ports::workbook::PlanSource;

pub const PLAN_SHEET: &str = "Plan";
pub const HEADER_ROWS: usize = 2;

const PRIMARY_COL: usize = 0;
const SECONDARY_COL: usize = 1;
const KEY_COL: usize = 2;

pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(v) => v.to_string(),
        Data::Float(v) => v.to_string(),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTime(v) => v.to_string(),
        Data::DateTimeIso(v) => v.to_string(),
        Data::DurationIso(v) => v.to_string(),
        Data::Error(v) => format!("{v:?}"),
        Data::Empty => String::new(),
    }
}

pub fn read_workbook_bytes(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("failed to read workbook: {}", path.display()))
}

pub fn parse_plan_workbook(bytes: &[u8]) -> Result<Vec<PlanRow>, PlanError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|err| PlanError::MalformedFile(err.to_string()))?;

    if !workbook.sheet_names().iter().any(|name| name == PLAN_SHEET) {
        return Err(PlanError::SheetNotFound {
            sheet: PLAN_SHEET.to_string(),
        });
    }

    let range = workbook
        .worksheet_range(PLAN_SHEET)
        .map_err(|err| PlanError::MalformedFile(format!("failed to read sheet {PLAN_SHEET}: {err}")))?;

    Ok(plan_rows_from_range(&range))
}

/// Both rows and columns are counted from the start of the used range, so
/// the first three occupied columns are the projected fields.
fn plan_rows_from_range(range: &Range<Data>) -> Vec<PlanRow> {
    range
        .rows()
        .skip(HEADER_ROWS)
        .enumerate()
        .map(|(index, row)| {
            let cell = |col: usize| row.get(col).map(cell_to_string).unwrap_or_default();
            PlanRow::new(
                index,
                cell(PRIMARY_COL),
                cell(SECONDARY_COL),
                cell(KEY_COL),
            )
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CalamineSource;

impl PlanSource for CalamineSource {
    fn parse(&self, bytes: &[u8]) -> Result<Vec<PlanRow>, PlanError> {
        parse_plan_workbook(bytes)
    }
}
