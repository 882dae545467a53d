/// Use cases module containing application business logic orchestration
mod browse_lists;

pub use browse_lists::BrowseListsUseCase;
