//! Listing domain - views, items and routes
//!
//! Pure logic with no I/O: the two item kinds, the per-view loading state
//! machine, the fixed-slice policy and the route table with its matcher.

pub mod domain;
pub mod policies;
pub mod services;
