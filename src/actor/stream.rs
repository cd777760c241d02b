//! Channel bundles returned by long-running actor operations.
//!
//! Producers close a channel by dropping its sender. Consumers track closure
//! per channel and stop once everything they wait on has closed.

use super::push::{PushEvent, PushPlan};
use super::types::{Droplet, LogMessage, PollJobEvent, Warnings};
use crate::error::ActorError;
use tokio::sync::{mpsc, oneshot};

/// A receiver whose sender is already gone.
pub fn closed_receiver<T>() -> mpsc::Receiver<T> {
    let (_tx, rx) = mpsc::channel(1);
    rx
}

/// Staging a package: the droplet, warnings and a terminal error.
pub struct StagingStreams {
    pub droplet: mpsc::Receiver<Droplet>,
    pub warnings: mpsc::Receiver<Warnings>,
    pub errors: mpsc::Receiver<ActorError>,
}

impl Default for StagingStreams {
    fn default() -> Self {
        Self {
            droplet: closed_receiver(),
            warnings: closed_receiver(),
            errors: closed_receiver(),
        }
    }
}

/// Streaming application logs until cancelled.
pub struct LogStream {
    pub messages: mpsc::Receiver<LogMessage>,
    pub errors: mpsc::Receiver<ActorError>,
    stop: Option<oneshot::Sender<()>>,
}

impl LogStream {
    pub fn new(
        messages: mpsc::Receiver<LogMessage>,
        errors: mpsc::Receiver<ActorError>,
        stop: oneshot::Sender<()>,
    ) -> Self {
        Self {
            messages,
            errors,
            stop: Some(stop),
        }
    }

    /// Split into the receivers and a handle that stops the producer.
    pub fn into_parts(
        self,
    ) -> (
        mpsc::Receiver<LogMessage>,
        mpsc::Receiver<ActorError>,
        LogStreamCancel,
    ) {
        (self.messages, self.errors, LogStreamCancel { stop: self.stop })
    }
}

impl Default for LogStream {
    fn default() -> Self {
        Self {
            messages: closed_receiver(),
            errors: closed_receiver(),
            stop: None,
        }
    }
}

/// Stops a log stream's producer. Idempotent.
pub struct LogStreamCancel {
    stop: Option<oneshot::Sender<()>>,
}

impl LogStreamCancel {
    pub fn cancel(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
    }
}

/// Events of an asynchronous job. `None` means the operation finished synchronously.
#[derive(Default)]
pub struct JobStream {
    pub events: Option<mpsc::Receiver<PollJobEvent>>,
}

impl JobStream {
    pub fn none() -> Self {
        Self { events: None }
    }

    pub fn from_receiver(events: mpsc::Receiver<PollJobEvent>) -> Self {
        Self {
            events: Some(events),
        }
    }
}

/// Preparing a space for push: app names, events, warnings, errors.
pub struct PrepareSpaceStreams {
    pub app_names: mpsc::Receiver<Vec<String>>,
    pub events: mpsc::Receiver<PushEvent>,
    pub warnings: mpsc::Receiver<Warnings>,
    pub errors: mpsc::Receiver<ActorError>,
}

impl Default for PrepareSpaceStreams {
    fn default() -> Self {
        Self {
            app_names: closed_receiver(),
            events: closed_receiver(),
            warnings: closed_receiver(),
            errors: closed_receiver(),
        }
    }
}

/// Applying one push plan: updated plans, events, warnings, errors.
pub struct ActualizeStreams {
    pub plans: mpsc::Receiver<PushPlan>,
    pub events: mpsc::Receiver<PushEvent>,
    pub warnings: mpsc::Receiver<Warnings>,
    pub errors: mpsc::Receiver<ActorError>,
}

impl Default for ActualizeStreams {
    fn default() -> Self {
        Self {
            plans: closed_receiver(),
            events: closed_receiver(),
            warnings: closed_receiver(),
            errors: closed_receiver(),
        }
    }
}
