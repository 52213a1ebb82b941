use chrono::{DateTime, Utc};

use crate::models::event::{self, Event};
use crate::models::store::DB;

pub struct EventService;

impl EventService {
    pub fn create(
        db: &mut DB<Event>,
        name: &str,
        time: DateTime<Utc>,
        address1: &str,
        address2: &str,
        city: &str,
        state: &str,
        zipcode: &str,
    ) -> Event {
        let event = event::new_event(name, time, address1, address2, city, state, zipcode);
        db.insert(event.id.clone(), event.clone());
        event
    }

    /// Events that have not yet happened, soonest first.
    pub fn upcoming(db: &DB<Event>, now: DateTime<Utc>) -> Vec<Event> {
        let mut events: Vec<Event> = db
            .values()
            .filter(|event| event.time >= now)
            .cloned()
            .collect();
        events.sort_by_key(|event| event.time);
        events
    }

    /// Remove an event by id. Returns false when the id is unknown.
    pub fn remove(db: &mut DB<Event>, event_id: &str) -> bool {
        db.remove(event_id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use std::collections::HashMap;

    #[test]
    fn create_inserts_event_into_db() {
        let mut db: DB<Event> = HashMap::new();
        let time = Utc.with_ymd_and_hms(2026, 9, 12, 18, 0, 0).unwrap();

        let event = EventService::create(
            &mut db,
            "Fall Kickoff",
            time,
            "1 Lomb Memorial Dr",
            "",
            "Rochester",
            "NY",
            "14623",
        );

        assert_eq!(db.len(), 1);
        let stored = db.get(&event.id).unwrap();
        assert_eq!(stored.name, "Fall Kickoff");
        assert_eq!(stored.time, time);
    }

    #[test]
    fn upcoming_filters_past_events_and_sorts() {
        let mut db: DB<Event> = HashMap::new();
        let now = Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap();

        let past = EventService::create(
            &mut db, "Old", now - Duration::hours(1), "a", "", "c", "NY", "14623",
        );
        let later = EventService::create(
            &mut db, "Later", now + Duration::hours(5), "a", "", "c", "NY", "14623",
        );
        let sooner = EventService::create(
            &mut db, "Sooner", now + Duration::hours(1), "a", "", "c", "NY", "14623",
        );

        let upcoming = EventService::upcoming(&db, now);
        assert_eq!(upcoming.len(), 2);
        assert_eq!(upcoming[0].id, sooner.id);
        assert_eq!(upcoming[1].id, later.id);
        assert!(!upcoming.iter().any(|event| event.id == past.id));
    }

    #[test]
    fn remove_reports_unknown_ids() {
        let mut db: DB<Event> = HashMap::new();
        let now = Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap();
        let event = EventService::create(
            &mut db, "One", now + Duration::hours(1), "a", "", "c", "NY", "14623",
        );

        assert!(EventService::remove(&mut db, &event.id));
        assert!(!EventService::remove(&mut db, &event.id));
        assert!(db.is_empty());
    }
}
