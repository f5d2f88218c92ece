use std::collections::HashMap;

use crate::domain::entities::plan_row::PlanRow;

/// Count of selected rows per key, kept in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    entries: Vec<(String, usize)>,
}

impl Tally {
    #[allow(dead_code)]
    pub fn get(&self, key: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(entry_key, _)| entry_key == key)
            .map(|(_, count)| *count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.entries
            .iter()
            .map(|(key, count)| (key.as_str(), *count))
    }
}

pub fn compute_tally(rows: &[PlanRow]) -> Tally {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<(String, usize)> = Vec::new();

    for row in rows.iter().filter(|row| row.selected) {
        match positions.get(row.key.as_str()) {
            Some(&pos) => entries[pos].1 += 1,
            None => {
                positions.insert(row.key.as_str(), entries.len());
                entries.push((row.key.clone(), 1));
            }
        }
    }

    Tally { entries }
}
