use crate::device_controller::{ControllerSnapshot, DeviceController};
use crate::domain::GestureObservation;
use crate::domain::events::Event;
use crate::gesture_classifier::GestureClassifier;
use serde::Serialize;
use tokio::sync::mpsc::error::SendError;
use tokio::sync::mpsc::{Receiver, Sender};
use tracing::{debug, info, instrument, trace, warn};

/// What viewers receive after every processed frame or timeout.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct SessionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gesture_data: Option<GestureObservation>,
    pub state: ControllerSnapshot,
}

/// Owns the classifier and the controller and feeds them events one at a time, in arrival order.
///
/// Every update is queued on `updates_tx`, so a slow reader applies backpressure instead of
/// missing frames.
#[derive(Debug)]
pub struct Session {
    classifier: GestureClassifier,
    controller: DeviceController,
    rx: Receiver<Event>,
    updates_tx: Sender<SessionUpdate>,
}

impl Session {
    pub fn new(
        rx: Receiver<Event>,
        updates_tx: Sender<SessionUpdate>,
        classifier: GestureClassifier,
        controller: DeviceController,
    ) -> Self {
        Session {
            classifier,
            controller,
            rx,
            updates_tx,
        }
    }

    /// Publishes the current state, then one update per frame and per timeout reset until the
    /// event channel closes or nobody reads the updates anymore.
    #[instrument(skip(self))]
    pub async fn listen(&mut self) {
        let initial = SessionUpdate {
            gesture_data: None,
            state: self.controller.snapshot(),
        };
        if self.publish(initial).await.is_err() {
            warn!("⚠️ Update channel closed before the session started");
            return;
        }

        while let Some(event) = self.rx.recv().await {
            trace!("🔵 Received event: {:?}", event);
            let update = match event {
                Event::Frame { landmarks, at } => {
                    let observation = self.classifier.classify(landmarks.as_ref());
                    let state = self.controller.advance(&observation, at);

                    Some(SessionUpdate {
                        gesture_data: Some(observation),
                        state,
                    })
                }
                Event::Tick { at } => self.controller.tick(at).then(|| {
                    debug!("🔵 Publishing timeout reset");
                    SessionUpdate {
                        gesture_data: None,
                        state: self.controller.snapshot(),
                    }
                }),
            };

            let Some(update) = update else {
                continue;
            };
            if self.publish(update).await.is_err() {
                warn!("⚠️ Update channel closed, session ended");
                return;
            }
        }

        info!("🔵 Event channel closed, session ended");
    }

    async fn publish(&self, update: SessionUpdate) -> Result<(), SendError<SessionUpdate>> {
        self.updates_tx.send(update).await
    }
}
