/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the shell uses to reach
/// external systems (HTTP endpoints, terminal, file system).
pub mod output_presenter;
pub mod page_renderer;
pub mod post_repository;
pub mod progress_reporter;
pub mod user_repository;

pub use output_presenter::OutputPresenter;
pub use page_renderer::PageRenderer;
pub use post_repository::PostRepository;
pub use progress_reporter::ProgressReporter;
pub use user_repository::UserRepository;
