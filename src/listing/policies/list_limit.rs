use crate::shared::error::ShellError;

/// Number of posts shown by the posts view
pub const DEFAULT_POST_LIMIT: usize = 15;

/// How many items of a response a view keeps.
///
/// Truncation keeps the first entries in response order; nothing is sorted
/// or filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListLimit {
    Unlimited,
    AtMost(usize),
}

impl ListLimit {
    /// Builds a bounded limit, rejecting zero
    pub fn at_most(limit: usize) -> Result<Self, ShellError> {
        if limit == 0 {
            return Err(ShellError::Validation {
                message: "post limit must be at least 1".to_string(),
            });
        }
        Ok(ListLimit::AtMost(limit))
    }

    pub fn posts_default() -> Self {
        ListLimit::AtMost(DEFAULT_POST_LIMIT)
    }

    pub fn apply<T>(&self, mut items: Vec<T>) -> Vec<T> {
        if let ListLimit::AtMost(limit) = self {
            items.truncate(*limit);
        }
        items
    }
}
