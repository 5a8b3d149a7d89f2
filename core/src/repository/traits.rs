use crate::model::history::HistoryEntry;
use anyhow::Result;

pub trait HistoryRepository {
    fn append(&mut self, entry: HistoryEntry) -> Result<()>;
    fn list(&self) -> Result<Vec<HistoryEntry>>;
    fn count(&self) -> Result<usize>;
}
