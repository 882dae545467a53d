/// A command fed to the shell's event loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Navigate to a path, as if a link had been followed
    Navigate(String),
    /// Stop the loop; in-flight requests are dropped
    Quit,
}

impl ShellCommand {
    /// Parses one line of interactive input.
    ///
    /// Blank lines yield `None`. `quit`, `exit` and `q` (any case) stop the
    /// loop; anything else is a path to navigate to.
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        match trimmed.to_lowercase().as_str() {
            "quit" | "exit" | "q" => Some(ShellCommand::Quit),
            _ => Some(ShellCommand::Navigate(trimmed.to_string())),
        }
    }
}
