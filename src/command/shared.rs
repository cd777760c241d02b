//! Helpers used by more than one command.

mod app_summary;
mod binding;
mod job;
mod poll;
mod stager;
mod version;

pub use app_summary::AppSummaryDisplayer;
pub use binding::{delete_service_binding, display_unbinding_in_progress};
pub use job::wait_for_result;
pub use poll::with_poll_warnings;
pub(crate) use stager::StagingLogs;
pub use stager::{AppAction, Stager};
pub use version::{
    compare_versions, meets_minimum, warn_if_api_version_below_supported_minimum,
    MIN_SUPPORTED_API_VERSION, MIN_UAA_VERSION_FOR_ORIGIN,
};
