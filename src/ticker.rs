use crate::domain::events::Event;
use std::time::Duration;
use tokio::sync::mpsc::Sender;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, instrument};

/// Keeps the inactivity timeout running while no frames arrive.
#[instrument(skip(tx))]
pub async fn ticker(tx: Sender<Event>, period: Duration) {
    let mut interval = interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        let at = interval.tick().await;
        if tx.send(Event::Tick { at }).await.is_err() {
            debug!("🕗 Session closed, stopping ticker");
            return;
        }
    }
}
