/// Ports module defining interfaces for hexagonal architecture
///
/// Only driven ports exist: the shell is driven directly by the
/// browse use case, which is the application's public entry point.
pub mod outbound;
