//! Terminal UI contract used by every command.
//!
//! Text goes to the output stream; warnings go to the error stream. Templates
//! use `{Key}` placeholders filled from `(key, value)` pairs; the terminal
//! implementation highlights substituted values.

use crate::actor::LogMessage;
use crate::error::CommandError;
use chrono::{DateTime, Utc};

mod buffered;
mod progress;
mod table;
mod template;
mod terminal;

pub use buffered::BufferedUi;
pub use progress::{NoopProgressBar, ProgressBar, UploadProgressBar};
pub use table::{render_key_value_table, render_table};
pub use template::render_template;
pub use terminal::TerminalUi;

/// Template substitution values.
pub type Values<'a> = &'a [(&'a str, &'a str)];

/// Menus with this many choices or more fall back to a typed prompt.
pub const MAX_MENU_CHOICES: usize = 50;

pub trait Ui: Send + Sync {
    fn display_text(&self, template: &str) {
        self.display_text_with_flavor(template, &[]);
    }

    /// Display a template, emphasizing the substituted values.
    fn display_text_with_flavor(&self, template: &str, values: Values<'_>);

    fn display_newline(&self);

    fn display_ok(&self);

    /// Single warning to the error stream.
    fn display_warning(&self, template: &str, values: Values<'_>);

    /// Each warning on its own line in the error stream, in order.
    fn display_warnings(&self, warnings: &[String]) {
        for warning in warnings {
            self.display_warning(warning, &[]);
        }
    }

    /// Two-column table, keys left-aligned and padded.
    fn display_key_value_table(&self, prefix: &str, rows: &[(String, String)], padding: usize);

    /// Table whose first row is a header.
    fn display_table(&self, prefix: &str, rows: &[Vec<String>], padding: usize);

    fn display_log_message(&self, message: &LogMessage, display_header: bool);

    fn display_bool_prompt(
        &self,
        default: bool,
        template: &str,
        values: Values<'_>,
    ) -> Result<bool, CommandError>;

    fn display_text_prompt(&self, template: &str, values: Values<'_>) -> Result<String, CommandError>;

    fn display_password_prompt(
        &self,
        template: &str,
        values: Values<'_>,
    ) -> Result<String, CommandError>;

    /// Offer numbered choices; the answer may be a number or an exact choice.
    fn display_text_menu(
        &self,
        choices: &[String],
        template: &str,
        values: Values<'_>,
    ) -> Result<String, CommandError>;

    fn user_friendly_date(&self, time: DateTime<Utc>) -> String {
        time.format("%a %d %b %H:%M:%S UTC %Y").to_string()
    }
}

/// `   <timestamp> [<source>/<instance>] OUT <line>`, one per message line.
pub(crate) fn format_log_message(message: &LogMessage) -> Vec<String> {
    let header = format!(
        "   {} [{}/{}] {} ",
        message.timestamp.format("%Y-%m-%dT%H:%M:%S%.2f%z"),
        message.source_type,
        message.source_instance,
        message.message_type,
    );
    message
        .message
        .trim_end_matches('\n')
        .lines()
        .map(|line| format!("{}{}", header, line))
        .collect()
}

/// Resolve a menu answer: a 1-based index or an exact choice.
pub(crate) fn resolve_menu_choice(choices: &[String], answer: &str) -> Result<String, CommandError> {
    let answer = answer.trim();
    if let Ok(index) = answer.parse::<usize>() {
        if index >= 1 && index <= choices.len() {
            return Ok(choices[index - 1].clone());
        }
    }
    choices
        .iter()
        .find(|choice| choice.as_str() == answer)
        .cloned()
        .ok_or_else(|| CommandError::Ui(format!("Invalid choice: {}", answer)))
}
