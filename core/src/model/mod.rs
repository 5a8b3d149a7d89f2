pub mod category;
pub mod history;
