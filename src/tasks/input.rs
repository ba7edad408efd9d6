//! Command input task

use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::mpsc,
};
use tracing::{debug, error, info, warn};

use crate::{commands::Command, presentation::Reply};

/// Read one command per line until EOF or until the refresh loop goes away.
///
/// Parse failures are answered on the reply channel and never end the task.
pub async fn input_task<R>(reader: R, commands: mpsc::Sender<Command>, replies: mpsc::Sender<Reply>)
where
    R: AsyncBufRead + Unpin,
{
    info!("Starting input task");
    let mut lines = reader.lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                info!("Input closed");
                break;
            }
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(command) => {
                debug!("Parsed command: {:?}", command);
                if commands.send(command).await.is_err() {
                    debug!("Refresh loop gone, stopping input task");
                    break;
                }
                if command == Command::Quit {
                    break;
                }
            }
            Err(e) => {
                warn!("Rejected input '{}': {}", line.trim(), e);
                if replies.send(Reply::error(e.to_string())).await.is_err() {
                    break;
                }
            }
        }
    }
}
