use std::convert::Infallible;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Deserialize;
use tokio::sync::Mutex;
use warp::http::StatusCode;
use warp::Filter;

use crate::events::queue::{EventBus, StoreEvent};
use crate::models::event::Event;
use crate::models::store::{save_db, DB};
use crate::service::event_service::EventService;
use crate::service::render_service::RenderService;

pub type SharedDb = Arc<Mutex<DB<Event>>>;

#[derive(Clone)]
pub struct ServerCtx {
    pub store: SharedDb,
    pub bus: EventBus,
    pub display_tz: Tz,
    pub db_location: String,
}

#[derive(Deserialize)]
struct EventQuery {
    event_id: String,
}

#[derive(Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
    pub time: DateTime<Utc>,
    pub address1: String,
    #[serde(default)]
    pub address2: Option<String>,
    pub city: String,
    pub state: String,
    pub zipcode: String,
}

fn with_ctx(ctx: ServerCtx) -> impl Filter<Extract = (ServerCtx,), Error = Infallible> + Clone {
    warp::any().map(move || ctx.clone())
}

pub fn routes(
    ctx: ServerCtx,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let upcoming = warp::path!("upcoming_events")
        .and(warp::get())
        .and(with_ctx(ctx.clone()))
        .and_then(upcoming_events);

    let summary = warp::path!("summary_data")
        .and(warp::get())
        .and(with_ctx(ctx.clone()))
        .and_then(summary_data);

    let delete = warp::path!("events" / "delete")
        .and(warp::post())
        .and(warp::query::<EventQuery>())
        .and(with_ctx(ctx.clone()))
        .and_then(delete_event);

    let create = warp::path!("events")
        .and(warp::post())
        .and(warp::body::content_length_limit(16 * 1024))
        .and(warp::body::json())
        .and(with_ctx(ctx))
        .and_then(create_event);

    upcoming.or(summary).or(delete).or(create)
}

async fn upcoming_events(ctx: ServerCtx) -> Result<impl warp::Reply, Infallible> {
    let db = ctx.store.lock().await;
    let events = EventService::upcoming(&db, Utc::now());
    Ok(warp::reply::html(RenderService::upcoming_events_fragment(
        &events,
        ctx.display_tz,
    )))
}

async fn summary_data(ctx: ServerCtx) -> Result<impl warp::Reply, Infallible> {
    let db = ctx.store.lock().await;
    let events = EventService::upcoming(&db, Utc::now());
    Ok(warp::reply::html(RenderService::summary_fragment(
        &events,
        ctx.display_tz,
    )))
}

async fn delete_event(query: EventQuery, ctx: ServerCtx) -> Result<impl warp::Reply, Infallible> {
    let mut db = ctx.store.lock().await;
    if !EventService::remove(&mut db, &query.event_id) {
        log::info!("Delete requested for unknown event {}", query.event_id);
        return Ok(StatusCode::NOT_FOUND);
    }
    if let Err(err) = save_db(&ctx.db_location, &db) {
        log::error!("Failed to save events after delete: {}", err);
        return Ok(StatusCode::INTERNAL_SERVER_ERROR);
    }
    drop(db);

    log::info!("Removed event {}", query.event_id);
    ctx.bus
        .emit(StoreEvent::EventRemoved {
            event_id: query.event_id,
        })
        .await;
    Ok(StatusCode::OK)
}

async fn create_event(
    request: CreateEventRequest,
    ctx: ServerCtx,
) -> Result<impl warp::Reply, Infallible> {
    let mut db = ctx.store.lock().await;
    let event = EventService::create(
        &mut db,
        &request.name,
        request.time,
        &request.address1,
        request.address2.as_deref().unwrap_or(""),
        &request.city,
        &request.state,
        &request.zipcode,
    );
    if let Err(err) = save_db(&ctx.db_location, &db) {
        log::error!("Failed to save events after create: {}", err);
        return Ok(warp::reply::with_status(
            warp::reply::json(&event),
            StatusCode::INTERNAL_SERVER_ERROR,
        ));
    }
    drop(db);

    log::info!("Created event {}: {}", event.id, event.name);
    ctx.bus
        .emit(StoreEvent::EventCreated {
            event_id: event.id.clone(),
        })
        .await;
    Ok(warp::reply::with_status(
        warp::reply::json(&event),
        StatusCode::CREATED,
    ))
}
