//! In-memory UI: records output and serves scripted answers to prompts.

use super::{format_log_message, render_key_value_table, render_table, render_template};
use super::{resolve_menu_choice, Ui, Values};
use crate::actor::LogMessage;
use crate::error::CommandError;
use parking_lot::Mutex;
use std::collections::VecDeque;

#[derive(Default)]
pub struct BufferedUi {
    out: Mutex<String>,
    err: Mutex<String>,
    input: Mutex<VecDeque<String>>,
}

impl BufferedUi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue answers for upcoming prompts, in order.
    pub fn with_input(lines: &[&str]) -> Self {
        let ui = Self::new();
        for line in lines {
            ui.push_input(line);
        }
        ui
    }

    pub fn push_input(&self, line: &str) {
        self.input.lock().push_back(line.to_string());
    }

    /// Everything written to the output stream so far.
    pub fn out(&self) -> String {
        self.out.lock().clone()
    }

    /// Everything written to the error stream so far.
    pub fn err(&self) -> String {
        self.err.lock().clone()
    }

    fn write_out(&self, text: &str) {
        let mut out = self.out.lock();
        out.push_str(text);
        out.push('\n');
    }

    fn next_input(&self) -> Result<String, CommandError> {
        self.input
            .lock()
            .pop_front()
            .ok_or_else(|| CommandError::Ui("EOF".to_string()))
    }
}

impl Ui for BufferedUi {
    fn display_text_with_flavor(&self, template: &str, values: Values<'_>) {
        self.write_out(&render_template(template, values));
    }

    fn display_newline(&self) {
        self.out.lock().push('\n');
    }

    fn display_ok(&self) {
        self.write_out("OK");
    }

    fn display_warning(&self, template: &str, values: Values<'_>) {
        let mut err = self.err.lock();
        err.push_str(&render_template(template, values));
        err.push('\n');
    }

    fn display_key_value_table(&self, prefix: &str, rows: &[(String, String)], padding: usize) {
        self.out
            .lock()
            .push_str(&render_key_value_table(prefix, rows, padding));
    }

    fn display_table(&self, prefix: &str, rows: &[Vec<String>], padding: usize) {
        self.out.lock().push_str(&render_table(prefix, rows, padding));
    }

    fn display_log_message(&self, message: &LogMessage, _display_header: bool) {
        for line in format_log_message(message) {
            self.write_out(&line);
        }
    }

    fn display_bool_prompt(
        &self,
        default: bool,
        template: &str,
        values: Values<'_>,
    ) -> Result<bool, CommandError> {
        let suffix = if default { "[Yn]" } else { "[yN]" };
        self.write_out(&format!("{} {}:", render_template(template, values), suffix));
        let answer = self.next_input()?;
        match answer.trim().to_ascii_lowercase().as_str() {
            "" => Ok(default),
            "y" | "yes" => Ok(true),
            "n" | "no" => Ok(false),
            other => Err(CommandError::Ui(format!("Invalid answer: {}", other))),
        }
    }

    fn display_text_prompt(&self, template: &str, values: Values<'_>) -> Result<String, CommandError> {
        self.write_out(&format!("{}:", render_template(template, values)));
        self.next_input()
    }

    fn display_password_prompt(
        &self,
        template: &str,
        values: Values<'_>,
    ) -> Result<String, CommandError> {
        self.write_out(&format!("{}:", render_template(template, values)));
        self.next_input()
    }

    fn display_text_menu(
        &self,
        choices: &[String],
        template: &str,
        values: Values<'_>,
    ) -> Result<String, CommandError> {
        for (i, choice) in choices.iter().enumerate() {
            self.write_out(&format!("{}. {}", i + 1, choice));
        }
        self.write_out(&format!("{}:", render_template(template, values)));
        let answer = self.next_input()?;
        resolve_menu_choice(choices, &answer)
    }
}
