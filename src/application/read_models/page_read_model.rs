//! Page read model
//!
//! One rendered frame of the shell: the persistent navigation bar plus the
//! mounted view, if any.

use super::list_view::{ListBody, ListViewModel};
use serde::Serialize;

/// Main read model for a rendered page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageReadModel {
    /// Brand text of the navigation bar, linking to `/`
    pub brand: String,
    /// Current location after redirects
    pub location: String,
    /// Navigation links in display order
    pub nav: Vec<NavLinkView>,
    /// Mounted view; `None` when no route matched
    pub view: Option<ListViewModel>,
}

impl PageReadModel {
    /// Whether the mounted view is still waiting for its response
    pub fn is_loading(&self) -> bool {
        matches!(
            self.view.as_ref().map(|v| &v.body),
            Some(ListBody::Loading)
        )
    }

    /// Whether the mounted view ended in the failed state
    pub fn is_failed(&self) -> bool {
        matches!(
            self.view.as_ref().map(|v| &v.body),
            Some(ListBody::Failed { .. })
        )
    }
}

/// View representation of a navigation link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLinkView {
    pub label: String,
    pub href: String,
    pub active: bool,
}
