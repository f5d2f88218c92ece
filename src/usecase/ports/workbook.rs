use crate::domain::entities::plan_row::PlanRow;
use crate::domain::error::PlanError;

/// Turns the raw bytes of a spreadsheet file into `Plan` rows.
pub trait PlanSource {
    fn parse(&self, bytes: &[u8]) -> Result<Vec<PlanRow>, PlanError>;
}
