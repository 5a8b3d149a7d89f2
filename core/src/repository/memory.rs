use anyhow::Result;

use crate::model::history::HistoryEntry;
use crate::repository::traits::HistoryRepository;

/// Session-scoped history. Entries live as long as the repository does.
#[derive(Debug, Default)]
pub struct InMemoryHistoryRepository {
    entries: Vec<HistoryEntry>,
}

impl InMemoryHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryRepository for InMemoryHistoryRepository {
    fn append(&mut self, entry: HistoryEntry) -> Result<()> {
        self.entries.push(entry);
        Ok(())
    }

    fn list(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self.entries.clone())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.entries.len())
    }
}
