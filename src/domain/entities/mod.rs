pub mod plan_row;
pub mod tally;
