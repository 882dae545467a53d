/// Application layer - shell, use cases and DTOs
///
/// This layer contains the event loop that owns the mounted view and the
/// use case that drives it, coordinating with infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod shell;
pub mod use_cases;
