use crate::application::read_models::PageReadModel;
use crate::shared::Result;

/// PageRenderer port for turning a page into presentable output
///
/// This port abstracts the output format (terminal text, HTML, JSON).
/// A renderer is called once per re-render of the shell.
pub trait PageRenderer {
    /// Renders the page read model
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn render(&self, page: &PageReadModel) -> Result<String>;
}
