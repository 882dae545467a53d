use crate::listing::domain::{RouteRule, RouteTable, ViewKind};
use crate::shared::error::ShellError;

/// Upper bound on redirect hops before resolution gives up
const MAX_REDIRECTS: usize = 8;

/// Outcome of resolving a path against the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteResolution {
    /// Location after all redirects were followed
    pub location: String,
    /// View to mount; `None` when no rule matched
    pub view: Option<ViewKind>,
    /// Number of redirects followed
    pub redirects: usize,
}

/// RouteMatcher - maps a requested path to the view that should be mounted
pub struct RouteMatcher;

impl RouteMatcher {
    /// Normalises a requested path.
    ///
    /// Drops any query string or fragment, trims whitespace and guarantees a
    /// leading slash. An empty path becomes `/`.
    pub fn normalize(raw: &str) -> String {
        let trimmed = raw.trim();
        let end = trimmed.find(['?', '#']).unwrap_or(trimmed.len());
        let path = trimmed[..end].trim();

        if path.is_empty() {
            "/".to_string()
        } else if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        }
    }

    /// Resolves a path, following redirects until a view or no rule matches
    ///
    /// # Errors
    /// Returns `ShellError::RedirectLoop` if redirects do not settle within
    /// a bounded number of hops.
    pub fn resolve(table: &RouteTable, raw: &str) -> Result<RouteResolution, ShellError> {
        let mut location = Self::normalize(raw);
        let mut redirects = 0;

        loop {
            match table.first_match(&location) {
                Some(RouteRule::Redirect { to, .. }) => {
                    if redirects == MAX_REDIRECTS {
                        return Err(ShellError::RedirectLoop {
                            path: Self::normalize(raw),
                        });
                    }
                    redirects += 1;
                    location = Self::normalize(to);
                }
                Some(RouteRule::Mount { view, .. }) => {
                    return Ok(RouteResolution {
                        location,
                        view: Some(*view),
                        redirects,
                    });
                }
                None => {
                    return Ok(RouteResolution {
                        location,
                        view: None,
                        redirects,
                    });
                }
            }
        }
    }
}
