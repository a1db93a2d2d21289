use crate::session::SessionUpdate;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc::Receiver;
use tracing::{instrument, warn};

/// Writes every session update as a single JSON line, in the order they were published.
/// Returns the writer once the session is gone.
#[instrument(skip_all)]
pub async fn report_writer<W>(mut rx: Receiver<SessionUpdate>, mut writer: W) -> W
where
    W: AsyncWrite + Unpin,
{
    while let Some(update) = rx.recv().await {
        let mut line = match serde_json::to_vec(&update) {
            Ok(line) => line,
            Err(err) => {
                warn!("⚠️ Could not serialize session update: {}", err);
                continue;
            }
        };
        line.push(b'\n');

        if let Err(err) = writer.write_all(&line).await {
            warn!("⚠️ Could not write session update: {}", err);
            continue;
        }
        if let Err(err) = writer.flush().await {
            warn!("⚠️ Could not flush session update: {}", err);
        }
    }

    writer
}
