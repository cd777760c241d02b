use crate::actor::Warnings;
use crate::error::ActorError;
use crate::ui::Ui;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::debug;

const POLL_WARNINGS_BUFFER: usize = 16;

/// Run a blocking poll while a background task prints the warnings it emits.
///
/// The drain task stops once the poll returns; warnings already queued are
/// still printed before this returns.
pub async fn with_poll_warnings<F, Fut>(ui: Arc<dyn Ui>, poll: F) -> Result<(), ActorError>
where
    F: FnOnce(mpsc::Sender<Warnings>) -> Fut,
    Fut: Future<Output = Result<(), ActorError>>,
{
    let (tx, mut rx) = mpsc::channel::<Warnings>(POLL_WARNINGS_BUFFER);
    let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

    let drain = tokio::spawn(async move {
        loop {
            tokio::select! {
                biased;
                Some(warnings) = rx.recv() => ui.display_warnings(&warnings),
                _ = &mut stop_rx => {
                    while let Ok(warnings) = rx.try_recv() {
                        ui.display_warnings(&warnings);
                    }
                    break;
                }
            }
        }
        debug!("poll warnings drain stopped");
    });

    let result = poll(tx).await;
    let _ = stop_tx.send(());
    let _ = drain.await;
    result
}
