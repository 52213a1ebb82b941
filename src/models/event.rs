use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::env;
use uuid::Uuid;

// Returns the directory where the event DB lives.
// Defaults to a relative "./data/events" directory.
pub fn get_db_location() -> String {
    if let Ok(path) = env::var("EVENT_DB_LOCATION") {
        return path;
    }
    let base = env::var("DB_LOCATION").unwrap_or("./data".to_string());
    format!("{}/events", base)
}

/// A single event on the board.
/// Events whose time has passed are removed by a background task.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub time: DateTime<Utc>,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
}

pub fn new_event(
    name: &str,
    time: DateTime<Utc>,
    address1: &str,
    address2: &str,
    city: &str,
    state: &str,
    zipcode: &str,
) -> Event {
    Event {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        time,
        address1: address1.to_string(),
        address2: address2.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        zipcode: zipcode.to_string(),
    }
}
