use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use chrono_tz::Tz;
use tokio::sync::Mutex;

use crate::client::api_client::HttpApiClient;
use crate::client::fragment_poller::{ConsoleContainer, FragmentPoller};
use crate::events::queue::EventBus;
use crate::models::event::Event;
use crate::models::store::DB;
use crate::server::routes::{self, ServerCtx};
use crate::tasks::cleanup_loop;
use crate::tasks::task_runner::TaskRunner;

pub async fn run_server(
    shared_db: Arc<Mutex<DB<Event>>>,
    bind_addr: String,
    db_location: String,
    display_tz: Tz,
) {
    let addr: SocketAddr = bind_addr.parse().expect("Invalid bind address");

    let (bus, rx) = EventBus::new(32);

    let mut task_runner = TaskRunner::new();
    task_runner.add_task({
        let db = shared_db.clone();
        let location = db_location.clone();
        move || {
            tokio::spawn(async move {
                cleanup_loop::run_cleanup_loop(db, location, rx).await;
            });
        }
    });
    task_runner.start_all();

    let ctx = ServerCtx {
        store: shared_db,
        bus,
        display_tz,
        db_location,
    };

    log::info!("Starting webserver on {}", addr);
    warp::serve(routes::routes(ctx)).run(addr).await;
}

/// The terminal rendition of the pages: one poller per fragment, printing
/// each fragment as it changes.
pub async fn run_watch(base_url: String, interval: Duration) {
    log::info!("Watching {} every {:?}", base_url, interval);
    let api = Arc::new(HttpApiClient::new(&base_url));

    let summary_poller = FragmentPoller::new(
        api.clone(),
        "/summary_data",
        interval,
        Arc::new(ConsoleContainer::new("Summary")),
    );
    let mut task_runner = TaskRunner::new();
    task_runner.add_task(move || {
        tokio::spawn(async move {
            summary_poller.run().await;
        });
    });
    task_runner.start_all();

    let events_poller = FragmentPoller::new(
        api,
        "/upcoming_events",
        interval,
        Arc::new(ConsoleContainer::new("Upcoming events")),
    );
    events_poller.run().await;
}
