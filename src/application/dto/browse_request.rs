use crate::application::shell::DEFAULT_BRAND;
use crate::listing::policies::ListLimit;
use crate::shared::error::ShellError;

/// BrowseRequest - Internal request DTO for the browse use case
///
/// Describes which paths to visit and how the shell should behave while
/// visiting them.
#[derive(Debug, Clone)]
pub struct BrowseRequest {
    /// Paths navigated to, in order
    pub paths: Vec<String>,
    /// Wait for each view to finish loading before the next navigation
    pub settle_each: bool,
    /// Present every re-render instead of only the final page
    pub live: bool,
    /// Navigation bar brand text
    pub brand: String,
    /// How many posts the posts view keeps
    pub post_limit: ListLimit,
}

impl BrowseRequest {
    pub fn builder() -> BrowseRequestBuilder {
        BrowseRequestBuilder::default()
    }
}

/// Builder for BrowseRequest with validation
#[derive(Debug, Default)]
pub struct BrowseRequestBuilder {
    paths: Vec<String>,
    no_settle: bool,
    live: bool,
    brand: Option<String>,
    post_limit: Option<usize>,
}

impl BrowseRequestBuilder {
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.paths.push(path.into());
        self
    }

    pub fn paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.paths.extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn settle_each(mut self, settle_each: bool) -> Self {
        self.no_settle = !settle_each;
        self
    }

    pub fn live(mut self, live: bool) -> Self {
        self.live = live;
        self
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn post_limit(mut self, post_limit: usize) -> Self {
        self.post_limit = Some(post_limit);
        self
    }

    /// Builds the request; no paths means the root path
    ///
    /// # Errors
    /// Returns `ShellError::Validation` for an empty brand or a zero post limit
    pub fn build(self) -> Result<BrowseRequest, ShellError> {
        let brand = self.brand.unwrap_or_else(|| DEFAULT_BRAND.to_string());
        if brand.trim().is_empty() {
            return Err(ShellError::Validation {
                message: "brand must not be empty".to_string(),
            });
        }

        let post_limit = match self.post_limit {
            Some(limit) => ListLimit::at_most(limit)?,
            None => ListLimit::posts_default(),
        };

        let paths = if self.paths.is_empty() {
            vec!["/".to_string()]
        } else {
            self.paths
        };

        Ok(BrowseRequest {
            paths,
            settle_each: !self.no_settle,
            live: self.live,
            brand,
            post_limit,
        })
    }
}
