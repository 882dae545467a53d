use crate::listing::domain::Post;
use crate::shared::Result;
use async_trait::async_trait;

/// PostRepository port for fetching the posts list
///
/// Implementations return every post the endpoint sends; truncation to the
/// displayed slice is the view's concern, not the repository's.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Fetches the posts collection in the order the endpoint returns it
    ///
    /// # Errors
    /// Returns an error if the request fails, the status is not a success,
    /// or the payload is not a JSON array of post objects.
    async fn fetch_posts(&self) -> Result<Vec<Post>>;
}
