pub mod export_service;
pub mod session_service;
