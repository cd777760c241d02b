use crate::actor::{JobState, JobStream};
use crate::error::ActorError;
use crate::ui::Ui;

/// Consume a job's events. Returns whether the job finished.
///
/// Without `wait`, the first `Polling` event ends the wait with `Ok(false)`:
/// the job carries on server side. A stream of `None` means the operation
/// already completed.
pub async fn wait_for_result(stream: JobStream, ui: &dyn Ui, wait: bool) -> Result<bool, ActorError> {
    let Some(mut events) = stream.events else {
        return Ok(true);
    };

    if wait {
        ui.display_text("Waiting for the operation to complete...");
    }

    let outcome = async {
        while let Some(event) = events.recv().await {
            ui.display_warnings(&event.warnings);
            if let Some(err) = event.err {
                return Err(err);
            }
            if event.state == JobState::Polling && !wait {
                return Ok(false);
            }
        }
        Ok(true)
    }
    .await;

    if wait {
        ui.display_newline();
    }
    outcome
}
