pub mod memory;
pub mod traits;

pub use memory::InMemoryHistoryRepository;
pub use traits::HistoryRepository;
