use async_trait::async_trait;

/// The HTTP seam between the pollers and the server.
/// Paths are server-relative and include any query string.
#[async_trait]
pub trait ApiClient: Send + Sync {
    async fn get_text(&self, path: &str) -> Result<String, String>;
    async fn post(&self, path: &str) -> Result<(), String>;
}

pub struct HttpApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    // The body is returned verbatim, whatever the response status.
    async fn get_text(&self, path: &str) -> Result<String, String> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;
        response
            .text()
            .await
            .map_err(|e| format!("Failed to read response body: {}", e))
    }

    async fn post(&self, path: &str) -> Result<(), String> {
        self.client
            .post(self.url(path))
            .send()
            .await
            .map(|_| ())
            .map_err(|e| format!("Request failed: {}", e))
    }
}
