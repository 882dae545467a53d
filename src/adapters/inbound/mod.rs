/// Inbound adapters - sources of shell commands
mod stdin_commands;

pub use stdin_commands::spawn_command_reader;
