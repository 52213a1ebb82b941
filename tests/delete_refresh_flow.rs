use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use eventBoard::client::api_client::ApiClient;
use eventBoard::client::fragment_poller::{remove_event, FragmentContainer, FragmentPoller};
use tokio::sync::Mutex as TokioMutex;

struct RecordingApi {
    fragment: String,
    post_result: Result<(), String>,
    gets: TokioMutex<Vec<String>>,
    posts: TokioMutex<Vec<String>>,
}

impl RecordingApi {
    fn new(fragment: &str, post_result: Result<(), String>) -> Self {
        Self {
            fragment: fragment.to_string(),
            post_result,
            gets: TokioMutex::new(Vec::new()),
            posts: TokioMutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ApiClient for RecordingApi {
    async fn get_text(&self, path: &str) -> Result<String, String> {
        self.gets.lock().await.push(path.to_string());
        Ok(self.fragment.clone())
    }

    async fn post(&self, path: &str) -> Result<(), String> {
        self.posts.lock().await.push(path.to_string());
        self.post_result.clone()
    }
}

#[tokio::test]
async fn delete_posts_exact_id_then_refreshes_once() {
    let api = Arc::new(RecordingApi::new("<ul></ul>", Ok(())));
    let container = Arc::new(FragmentContainer::new());
    let poller = FragmentPoller::new(
        api.clone(),
        "/upcoming_events",
        Duration::from_millis(5000),
        container.clone(),
    );

    remove_event(api.as_ref(), &poller, "abc-123")
        .await
        .expect("delete should succeed");

    let posts = api.posts.lock().await;
    assert_eq!(*posts, vec!["/events/delete?event_id=abc-123".to_string()]);
    let gets = api.gets.lock().await;
    assert_eq!(gets.len(), 1);
    assert_eq!(gets[0], "/upcoming_events");
    assert_eq!(container.get(), "<ul></ul>");
}

#[tokio::test]
async fn failed_delete_does_not_refresh() {
    let api = Arc::new(RecordingApi::new(
        "<ul></ul>",
        Err("server unreachable".to_string()),
    ));
    let container = Arc::new(FragmentContainer::new());
    let poller = FragmentPoller::new(
        api.clone(),
        "/upcoming_events",
        Duration::from_millis(5000),
        container.clone(),
    );

    let err = remove_event(api.as_ref(), &poller, "abc-123")
        .await
        .expect_err("delete should fail");
    assert!(err.contains("server unreachable"));

    let gets = api.gets.lock().await;
    assert!(gets.is_empty());
    assert_eq!(container.get(), "");
}
