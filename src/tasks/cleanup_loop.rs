use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, Mutex};
use tokio::time::sleep;

use crate::events::queue::StoreEvent;
use crate::models::event::Event;
use crate::models::store::{save_db, DB};

/// Sweep old events off the board. Wakes when the store changes or once a
/// minute, whichever comes first, and persists only when something was
/// removed.
pub async fn run_cleanup_loop(
    db: Arc<Mutex<DB<Event>>>,
    db_location: String,
    mut rx: mpsc::Receiver<StoreEvent>,
) {
    loop {
        tokio::select! {
            _ = sleep(Duration::from_secs(60)) => {}
            event = rx.recv() => {
                match event {
                    Some(event) => log::info!("Store changed: {:?}", event),
                    None => break,
                }
            }
        }
        let mut db = db.lock().await;
        let removed = cleanup_tick(&mut db, Utc::now());
        if !removed.is_empty() {
            if let Err(err) = save_db(&db_location, &db) {
                log::error!("Failed to save events after cleanup: {}", err);
            }
        }
    }
}

/// Remove every event whose time has passed. Returns the removed ids.
pub fn cleanup_tick(db: &mut DB<Event>, now: DateTime<Utc>) -> Vec<String> {
    let expired: Vec<String> = db
        .values()
        .filter(|event| event.time < now)
        .map(|event| event.id.clone())
        .collect();
    for event_id in &expired {
        log::info!("Event {} has passed, removing", event_id);
        db.remove(event_id.as_str());
    }
    expired
}
