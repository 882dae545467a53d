pub mod list_limit;

pub use list_limit::{ListLimit, DEFAULT_POST_LIMIT};
