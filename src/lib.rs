//! postboard - users and posts lists rendered in the terminal
//!
//! A small client-side shell: a router maps paths to two list views, each
//! view issues a single GET when it mounts and shows a spinner until the
//! response arrives, and every state change re-renders the page as text,
//! HTML or JSON.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`listing`): items, view state, routes and the post limit
//! - **Application Layer** (`application`): the shell event loop, use cases and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): HTTP repositories, renderers, presenters and the stdin reader
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use postboard::prelude::*;
//! use std::time::Duration;
//!
//! # async fn demo() -> Result<()> {
//! let timeout = Duration::from_secs(30);
//! let use_case = BrowseListsUseCase::new(
//!     HttpUserRepository::new("http://localhost:8000", timeout)?,
//!     HttpPostRepository::new("https://jsonplaceholder.typicode.com/posts/", timeout)?,
//!     StderrProgressReporter::new(),
//!     Box::new(HtmlRenderer::new()),
//!     Box::new(StdoutPresenter::new()),
//! );
//!
//! let request = BrowseRequest::builder().paths(["/", "/posts"]).build()?;
//! let response = use_case.execute(request).await?;
//! assert!(!response.final_page.is_loading());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod listing;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::inbound::spawn_command_reader;
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{HtmlRenderer, JsonRenderer, TextRenderer};
    pub use crate::adapters::outbound::network::{HttpPostRepository, HttpUserRepository};
    pub use crate::application::dto::{BrowseRequest, BrowseResponse, OutputFormat};
    pub use crate::application::read_models::{ListBody, PageReadModel};
    pub use crate::application::shell::{Shell, ShellCommand, ShellSettings};
    pub use crate::application::use_cases::BrowseListsUseCase;
    pub use crate::listing::domain::{Post, RouteTable, User, ViewKind, ViewState};
    pub use crate::listing::policies::ListLimit;
    pub use crate::ports::outbound::{
        OutputPresenter, PageRenderer, PostRepository, ProgressReporter, UserRepository,
    };
    pub use crate::shared::Result;
}
