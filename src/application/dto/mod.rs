/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod browse_request;
mod browse_response;
mod output_format;

pub use browse_request::{BrowseRequest, BrowseRequestBuilder};
pub use browse_response::BrowseResponse;
pub use output_format::OutputFormat;
