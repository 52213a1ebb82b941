pub mod event_service;
pub mod render_service;
