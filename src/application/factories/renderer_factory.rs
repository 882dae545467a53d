use crate::adapters::outbound::formatters::{HtmlRenderer, JsonRenderer, TextRenderer};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::PageRenderer;

/// Factory for creating page renderers
///
/// This factory encapsulates the choice of renderer adapter for an output
/// format. It lives in the application layer because it maps an
/// application-level choice onto infrastructure.
pub struct RendererFactory;

impl RendererFactory {
    /// Creates a renderer for the specified output format
    ///
    /// # Arguments
    /// * `format` - The output format
    /// * `colored` - Whether terminal text may use ANSI colors; ignored by
    ///   the HTML and JSON renderers
    ///
    /// # Examples
    /// ```
    /// use postboard::application::dto::OutputFormat;
    /// use postboard::application::factories::RendererFactory;
    ///
    /// let renderer = RendererFactory::create(OutputFormat::Html, false);
    /// ```
    pub fn create(format: OutputFormat, colored: bool) -> Box<dyn PageRenderer> {
        match format {
            OutputFormat::Text => Box::new(TextRenderer::new(colored)),
            OutputFormat::Html => Box::new(HtmlRenderer::new()),
            OutputFormat::Json => Box::new(JsonRenderer::new()),
        }
    }
}
