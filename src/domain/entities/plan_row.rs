/// One data row of the `Plan` sheet, projected onto its first three columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRow {
    pub index: usize,
    pub primary: String,
    pub secondary: String,
    pub key: String,
    pub selected: bool,
}

impl PlanRow {
    pub fn new(index: usize, primary: String, secondary: String, key: String) -> Self {
        Self {
            index,
            primary,
            secondary,
            key,
            selected: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    Empty,
    Loaded,
}

/// Parsed rows in sheet order together with their selection flags.
#[derive(Debug, Clone)]
pub struct RowStore {
    rows: Vec<PlanRow>,
    state: StoreState,
}

impl Default for RowStore {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            state: StoreState::Empty,
        }
    }
}

impl RowStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_all(&mut self, rows: Vec<PlanRow>) {
        self.rows = rows;
        self.state = StoreState::Loaded;
    }

    /// Flips the selection of the row carrying `index`. Returns `false` when no
    /// such row exists, leaving the store untouched.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.rows.iter_mut().find(|row| row.index == index) {
            Some(row) => {
                row.selected = !row.selected;
                true
            }
            None => {
                log::debug!("ignoring toggle for unknown row index {index}");
                false
            }
        }
    }

    pub fn snapshot(&self) -> &[PlanRow] {
        &self.rows
    }

    pub fn state(&self) -> StoreState {
        self.state
    }

    pub fn is_loaded(&self) -> bool {
        self.state() == StoreState::Loaded
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn selected_count(&self) -> usize {
        self.rows.iter().filter(|row| row.selected).count()
    }
}
