pub mod dto;
pub mod history_service;
pub mod impact_service;
