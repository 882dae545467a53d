//! Read models for rendering
//!
//! View-optimized structs built from the shell's state; every renderer
//! consumes these instead of the domain types.

pub mod list_view;
pub mod page_read_model;
pub mod page_read_model_builder;

pub use list_view::{ListBody, ListViewModel, PostCard, UserCard};
pub use page_read_model::{NavLinkView, PageReadModel};
pub use page_read_model_builder::PageReadModelBuilder;
