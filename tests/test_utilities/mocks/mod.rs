/// Mock implementations for testing
mod mock_output_presenter;
mod mock_post_repository;
mod mock_progress_reporter;
mod mock_user_repository;

pub use mock_output_presenter::MockOutputPresenter;
pub use mock_post_repository::MockPostRepository;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_user_repository::MockUserRepository;
