use async_trait::async_trait;
use reqwest::{Request, Response};

/// Executes a prepared request. Lets the loader run against any transport
/// that can hand back a `reqwest::Response`.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}
