use crate::application::shell::ShellCommand;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

/// Spawns a task turning input lines into shell commands.
///
/// Blank lines are skipped. The task stops after forwarding `Quit`, at end
/// of input, on a read error, or once the receiver is dropped; the channel
/// closes when it stops.
pub fn spawn_command_reader<R>(reader: R) -> mpsc::UnboundedReceiver<ShellCommand>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        let mut lines = reader.lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    let Some(command) = ShellCommand::parse(&line) else {
                        continue;
                    };
                    let quit = command == ShellCommand::Quit;
                    if tx.send(command).is_err() || quit {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!(error = %e, "failed to read command input");
                    break;
                }
            }
        }
        tracing::debug!("command reader stopped");
    });

    rx
}
