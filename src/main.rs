use crate::app_config::AppConfig;
use crate::device_controller::DeviceController;
use crate::domain::events::Event;
use crate::frame_source::read_frames;
use crate::gesture_classifier::GestureClassifier;
use crate::report_writer::report_writer;
use crate::session::{Session, SessionUpdate};
use crate::ticker::ticker;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tokio::{io, task};
use tracing::info;

mod app_config;
mod device_controller;
mod domain;
mod frame_source;
mod gesture_classifier;
mod report_writer;
mod session;
mod ticker;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let (tx, rx) = mpsc::channel::<Event>(config.core().event_buffer_size());
    let controller = DeviceController::new(config.controller().timeout(), Instant::now());
    let (updates_tx, updates_rx) = mpsc::channel::<SessionUpdate>(config.core().event_buffer_size());
    let mut session = Session::new(rx, updates_tx, GestureClassifier::new(), controller);

    let writer = task::spawn(async move {
        report_writer(updates_rx, io::stdout()).await;
    });
    info!("✅  Initialized report writer");

    let session = task::spawn(async move {
        session.listen().await;
    });
    info!("✅  Initialized session");

    let ticker = task::spawn(ticker(tx.clone(), config.core().tick_interval()));
    info!("✅  Initialized ticker");

    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));
    let result = read_frames(tx, io::stdin()).await;

    ticker.abort();
    session.await?;
    writer.await?;

    result?;
    Ok(())
}
