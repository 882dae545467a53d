use super::http_client::{build_client, get_json, parse_endpoint};
use super::wire::PostDto;
use crate::listing::domain::Post;
use crate::ports::outbound::PostRepository;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;

/// Default posts endpoint
pub const DEFAULT_POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts/";

/// HttpPostRepository adapter reading the full posts collection
///
/// The collection is returned untruncated; the posts view applies its own
/// limit.
pub struct HttpPostRepository {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpPostRepository {
    /// Creates a repository for the given posts URL, used verbatim
    pub fn new(posts_url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            endpoint: parse_endpoint(posts_url)?,
        })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

#[async_trait]
impl PostRepository for HttpPostRepository {
    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        let posts: Vec<PostDto> = get_json(&self.client, &self.endpoint).await?;
        Ok(posts.into_iter().map(Post::from).collect())
    }
}
