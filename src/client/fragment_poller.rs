use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::sleep;

use crate::client::api_client::ApiClient;

/// Where a fetched fragment lands. The Rust stand-in for a page element.
pub trait FragmentSink: Send + Sync {
    fn apply(&self, html: &str);
}

/// Holds the latest fragment in memory. Whatever arrives last wins.
pub struct FragmentContainer {
    html: Mutex<String>,
}

impl FragmentContainer {
    pub fn new() -> Self {
        Self {
            html: Mutex::new(String::new()),
        }
    }

    pub fn get(&self) -> String {
        self.html.lock().unwrap().clone()
    }
}

impl Default for FragmentContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl FragmentSink for FragmentContainer {
    fn apply(&self, html: &str) {
        *self.html.lock().unwrap() = html.to_string();
    }
}

/// Prints a labelled fragment to stdout when the content actually changes.
pub struct ConsoleContainer {
    label: String,
    last: Mutex<String>,
}

impl ConsoleContainer {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            last: Mutex::new(String::new()),
        }
    }
}

impl FragmentSink for ConsoleContainer {
    fn apply(&self, html: &str) {
        let mut last = self.last.lock().unwrap();
        if *last == html {
            return;
        }
        *last = html.to_string();
        println!("--- {} ---\n{}", self.label, html);
    }
}

/// Repeatedly fetches one fragment endpoint and hands the body to a sink.
///
/// One poller binds one endpoint to one sink; the pages that used to carry
/// their own copy of this logic all go through here with different
/// parameters.
pub struct FragmentPoller {
    api: Arc<dyn ApiClient>,
    endpoint: String,
    interval: Duration,
    sink: Arc<dyn FragmentSink>,
}

impl FragmentPoller {
    pub fn new(
        api: Arc<dyn ApiClient>,
        endpoint: &str,
        interval: Duration,
        sink: Arc<dyn FragmentSink>,
    ) -> Self {
        Self {
            api,
            endpoint: endpoint.to_string(),
            interval,
            sink,
        }
    }

    /// One fetch. On success the sink receives the body verbatim; on
    /// failure the sink is left untouched and the error is returned.
    pub async fn refresh(&self) -> Result<(), String> {
        let body = self.api.get_text(&self.endpoint).await?;
        self.sink.apply(&body);
        Ok(())
    }

    /// Refresh once immediately, then again after every interval.
    /// Failures are logged and the previous content stays in place.
    pub async fn run(self) {
        if let Err(err) = self.refresh().await {
            log::error!("Failed to refresh {}: {}", self.endpoint, err);
        }
        loop {
            sleep(self.interval).await;
            if let Err(err) = self.refresh().await {
                log::error!("Failed to refresh {}: {}", self.endpoint, err);
            }
        }
    }
}

/// Ask the server to remove an event, then refresh the poller's fragment
/// once. Nothing changes locally until the refreshed fragment arrives, so
/// a failed request needs no rollback.
pub async fn remove_event(
    api: &dyn ApiClient,
    poller: &FragmentPoller,
    event_id: &str,
) -> Result<(), String> {
    let path = format!("/events/delete?event_id={}", event_id);
    api.post(&path).await?;
    poller.refresh().await
}
