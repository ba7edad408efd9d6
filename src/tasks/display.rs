//! Display task

use tokio::{
    io::{AsyncWrite, AsyncWriteExt},
    sync::{mpsc, watch},
};
use tracing::{error, info};

use crate::presentation::{Renderer, Reply, Snapshot};

/// Write frames and replies until both channels close
pub async fn display_task<W>(
    mut renderer: Renderer,
    mut frames: watch::Receiver<Snapshot>,
    mut replies: mpsc::Receiver<Reply>,
    mut out: W,
) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    info!("Starting display task");

    let initial = frames.borrow_and_update().clone();
    write_snapshot(&mut renderer, &initial, &mut out).await?;

    let mut frames_open = true;
    let mut replies_open = true;

    while frames_open || replies_open {
        tokio::select! {
            changed = frames.changed(), if frames_open => {
                if changed.is_err() {
                    frames_open = false;
                    continue;
                }
                let snapshot = frames.borrow_and_update().clone();
                write_snapshot(&mut renderer, &snapshot, &mut out).await?;
            }
            reply = replies.recv(), if replies_open => {
                let Some(reply) = reply else {
                    replies_open = false;
                    continue;
                };
                match renderer.render_reply(&reply) {
                    Ok(line) => write_line(&mut out, &line).await?,
                    Err(e) => error!("Failed to render reply: {}", e),
                }
            }
        }
    }

    out.flush().await
}

async fn write_snapshot<W>(renderer: &mut Renderer, snapshot: &Snapshot, out: &mut W) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    match renderer.render_snapshot(snapshot) {
        Ok(lines) => {
            for line in lines {
                write_line(out, &line).await?;
            }
        }
        Err(e) => error!("Failed to render snapshot: {}", e),
    }
    Ok(())
}

async fn write_line<W>(out: &mut W, line: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(line.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await
}
