use super::http_client::{build_client, get_json, parse_endpoint};
use super::wire::UserDto;
use crate::listing::domain::User;
use crate::ports::outbound::UserRepository;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;

/// Default base URL of the local users API
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Path of the users collection below the API base URL
pub const USERS_PATH: &str = "/api/users";

/// HttpUserRepository adapter reading `GET {base}/api/users`
pub struct HttpUserRepository {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpUserRepository {
    /// Creates a repository for the given API base URL
    ///
    /// A trailing slash on the base URL is ignored.
    ///
    /// # Errors
    /// Returns `ShellError::InvalidEndpoint` if the base URL is not an
    /// absolute http(s) URL, or an error if the client cannot be built.
    pub fn new(api_base_url: &str, timeout: Duration) -> Result<Self> {
        let base = api_base_url.trim().trim_end_matches('/');
        let endpoint = parse_endpoint(&format!("{}{}", base, USERS_PATH))?;
        Ok(Self {
            client: build_client(timeout)?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

#[async_trait]
impl UserRepository for HttpUserRepository {
    async fn fetch_users(&self) -> Result<Vec<User>> {
        let users: Vec<UserDto> = get_json(&self.client, &self.endpoint).await?;
        Ok(users.into_iter().map(User::from).collect())
    }
}
