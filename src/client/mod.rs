pub mod api_client;
pub mod fragment_poller;
