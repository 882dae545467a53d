/// Network adapters for the users and posts endpoints
mod http_client;
mod posts_client;
mod users_client;
mod wire;

pub use http_client::{parse_endpoint, DEFAULT_TIMEOUT_SECS};
pub use posts_client::{HttpPostRepository, DEFAULT_POSTS_URL};
pub use users_client::{HttpUserRepository, DEFAULT_API_BASE_URL, USERS_PATH};
