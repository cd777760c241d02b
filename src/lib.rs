//! cfcli: the command layer of a Cloud Foundry style platform CLI.
//!
//! Each module under [`command`] implements one verb. Commands validate their
//! flags, check the session target, delegate to the actor traits in [`actor`]
//! and render results through [`ui::Ui`]. Actor implementations (API clients,
//! push reconciliation) are supplied by the embedding binary.

pub mod actor;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod logging;
pub mod ui;
