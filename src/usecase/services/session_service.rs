use std::sync::Arc;

use crate::domain::entities::plan_row::{PlanRow, RowStore};
use crate::domain::entities::tally::{compute_tally, Tally};
use crate::domain::error::PlanError;
use crate::usecase::ports::workbook::PlanSource;
use crate::usecase::services::export_service::serialize_tally;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    ParseFile(Vec<u8>),
    ToggleRow(usize),
    Export,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    RowsLoaded { count: usize },
    ParseFailed(PlanError),
    RowToggled { index: usize, selected: bool },
    ToggleIgnored { index: usize },
    TallyUpdated { keys: usize, total: usize },
    ExportReady(String),
}

/// Owns the row store and its derived tally. Every mutation recomputes the
/// tally before returning, so callers never see a toggled row next to a
/// stale count.
pub struct PlanSession {
    source: Arc<dyn PlanSource>,
    store: RowStore,
    tally: Tally,
}

impl PlanSession {
    pub fn new(source: Arc<dyn PlanSource>) -> Self {
        Self {
            source,
            store: RowStore::new(),
            tally: Tally::default(),
        }
    }

    pub fn rows(&self) -> &[PlanRow] {
        self.store.snapshot()
    }

    pub fn store(&self) -> &RowStore {
        &self.store
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn dispatch(&mut self, command: SessionCommand) -> Vec<SessionEvent> {
        match command {
            SessionCommand::ParseFile(bytes) => self.load(&bytes),
            SessionCommand::ToggleRow(index) => self.toggle(index),
            SessionCommand::Export => vec![SessionEvent::ExportReady(serialize_tally(&self.tally))],
        }
    }

    fn load(&mut self, bytes: &[u8]) -> Vec<SessionEvent> {
        match self.source.parse(bytes) {
            Ok(rows) => {
                let count = rows.len();
                self.store.replace_all(rows);
                log::info!("loaded {count} plan rows");
                vec![SessionEvent::RowsLoaded { count }, self.recompute()]
            }
            Err(err) => {
                log::warn!("plan import rejected: {err}");
                vec![SessionEvent::ParseFailed(err)]
            }
        }
    }

    fn toggle(&mut self, index: usize) -> Vec<SessionEvent> {
        if !self.store.toggle(index) {
            return vec![SessionEvent::ToggleIgnored { index }];
        }

        let selected = self
            .store
            .snapshot()
            .iter()
            .find(|row| row.index == index)
            .is_some_and(|row| row.selected);
        vec![
            SessionEvent::RowToggled { index, selected },
            self.recompute(),
        ]
    }

    fn recompute(&mut self) -> SessionEvent {
        self.tally = compute_tally(self.store.snapshot());
        SessionEvent::TallyUpdated {
            keys: self.tally.len(),
            total: self.tally.total(),
        }
    }
}
