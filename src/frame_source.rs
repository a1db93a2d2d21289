use crate::domain::events::Event;
use crate::domain::keypoint::LandmarkError;
use crate::domain::{HandLandmarks, Keypoint};
use serde::Deserialize;
use std::io;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc::Sender;
use tokio::sync::mpsc::error::SendError;
use tokio::time::Instant;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::LinesStream;
use tracing::{info, instrument, warn};

#[derive(Deserialize)]
struct FramePayload {
    #[serde(default)]
    landmarks: Option<Vec<Keypoint>>,
}

/// Decodes one JSON frame. `Ok(None)` means the provider found no hand.
pub fn decode_frame(line: &str) -> Result<Option<HandLandmarks>, FrameDecodeError> {
    let payload: FramePayload = serde_json::from_str(line)?;

    match payload.landmarks {
        Some(points) => Ok(Some(HandLandmarks::try_from(points)?)),
        None => Ok(None),
    }
}

/// Forwards newline-delimited JSON frames to the session until `reader` is exhausted.
///
/// Frames that fail to decode are dropped so they never reach the classifier.
#[instrument(skip_all)]
pub async fn read_frames<R>(tx: Sender<Event>, reader: R) -> Result<(), FrameSourceError>
where
    R: AsyncRead + Unpin,
{
    let mut lines = LinesStream::new(BufReader::new(reader).lines());
    let mut forwarded = 0usize;
    let mut skipped = 0usize;

    info!("📷 Reading frames...");
    while let Some(line) = lines.next().await {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let landmarks = match decode_frame(&line) {
            Ok(landmarks) => landmarks,
            Err(err) => {
                warn!("⚠️ Skipping frame: {}", err);
                skipped += 1;
                continue;
            }
        };

        tx.send(Event::Frame { landmarks, at: Instant::now() }).await?;
        forwarded += 1;
    }

    info!("📷 Reading frames... OK, {} forwarded, {} skipped", forwarded, skipped);
    Ok(())
}

#[derive(Error, Debug)]
pub enum FrameDecodeError {
    #[error("invalid frame: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Landmarks(#[from] LandmarkError),
}

#[derive(Error, Debug)]
pub enum FrameSourceError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("session is no longer accepting frames")]
    SessionClosed(#[from] SendError<Event>),
}
