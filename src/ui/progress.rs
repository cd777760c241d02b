//! Upload progress for push.

use indicatif::{ProgressBar as Bar, ProgressDrawTarget, ProgressStyle};
use parking_lot::Mutex;

const UPLOAD_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}";

/// Progress hooks the push actor drives while uploading application bits.
pub trait ProgressBar: Send + Sync {
    /// Upload is about to start; show the bar.
    fn ready(&self);
    fn set_total(&self, bytes: u64);
    fn advance(&self, bytes: u64);
    /// Upload finished; remove the bar.
    fn complete(&self);
}

/// Byte-counting bar drawn on stderr.
pub struct UploadProgressBar {
    bar: Mutex<Option<Bar>>,
    total: Mutex<u64>,
}

impl UploadProgressBar {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
            total: Mutex::new(0),
        }
    }
}

impl Default for UploadProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressBar for UploadProgressBar {
    fn ready(&self) {
        let bar = Bar::with_draw_target(Some(*self.total.lock()), ProgressDrawTarget::stderr());
        if let Ok(style) = ProgressStyle::with_template(UPLOAD_TEMPLATE) {
            bar.set_style(style.progress_chars("=> "));
        }
        *self.bar.lock() = Some(bar);
    }

    fn set_total(&self, bytes: u64) {
        *self.total.lock() = bytes;
        if let Some(bar) = self.bar.lock().as_ref() {
            bar.set_length(bytes);
        }
    }

    fn advance(&self, bytes: u64) {
        if let Some(bar) = self.bar.lock().as_ref() {
            bar.inc(bytes);
        }
    }

    fn complete(&self) {
        if let Some(bar) = self.bar.lock().take() {
            bar.finish_and_clear();
        }
    }
}

/// Progress bar that draws nothing (non-interactive output).
#[derive(Debug, Default)]
pub struct NoopProgressBar;

impl ProgressBar for NoopProgressBar {
    fn ready(&self) {}
    fn set_total(&self, _bytes: u64) {}
    fn advance(&self, _bytes: u64) {}
    fn complete(&self) {}
}
