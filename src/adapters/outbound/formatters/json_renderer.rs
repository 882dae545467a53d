use crate::application::read_models::PageReadModel;
use crate::ports::outbound::PageRenderer;
use crate::shared::Result;

/// JsonRenderer adapter serializing the page read model as pretty JSON
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRenderer for JsonRenderer {
    fn render(&self, page: &PageReadModel) -> Result<String> {
        let json = serde_json::to_string_pretty(page)
            .map_err(|e| anyhow::anyhow!("Failed to serialize page to JSON: {}", e))?;
        Ok(json)
    }
}
