/// Renderer adapters for the supported page output formats
mod html_renderer;
mod json_renderer;
mod text_renderer;

pub use html_renderer::HtmlRenderer;
pub use json_renderer::JsonRenderer;
pub use text_renderer::TextRenderer;
