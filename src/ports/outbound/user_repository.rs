use crate::listing::domain::User;
use crate::shared::Result;
use async_trait::async_trait;

/// UserRepository port for fetching the users list
///
/// This port abstracts the local users API the users view reads from.
/// Implementations must be `Send + Sync` so a pending request can be held
/// by the shell's event loop independently of the view that issued it.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetches the full users collection in the order the endpoint returns it
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails or times out
    /// - The API returns a non-success status code
    /// - The response is not a JSON array of user objects
    async fn fetch_users(&self) -> Result<Vec<User>>;
}
