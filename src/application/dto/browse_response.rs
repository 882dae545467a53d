use crate::application::read_models::PageReadModel;
use crate::application::shell::ShellStats;

/// BrowseResponse - Result of a browse session
#[derive(Debug, Clone)]
pub struct BrowseResponse {
    /// The page as it stood when the session ended
    pub final_page: PageReadModel,
    /// What the shell did during the session
    pub stats: ShellStats,
}

impl BrowseResponse {
    pub fn new(final_page: PageReadModel, stats: ShellStats) -> Self {
        Self { final_page, stats }
    }

    /// Whether the view mounted at the end failed to load
    pub fn final_view_failed(&self) -> bool {
        self.final_page.is_failed()
    }
}
