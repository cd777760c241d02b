//! Interactive terminal UI.

use super::template::render_template_with;
use super::{format_log_message, resolve_menu_choice};
use super::{Ui, Values, MAX_MENU_CHOICES};
use crate::actor::{LogMessage, LogMessageType};
use crate::error::CommandError;
use comfy_table::presets::NOTHING;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use dialoguer::{Confirm, Input, Password, Select};
use owo_colors::OwoColorize;

pub struct TerminalUi {
    color: bool,
}

impl TerminalUi {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn flavor(&self, template: &str, values: Values<'_>) -> String {
        if self.color {
            render_template_with(template, values, |v| v.cyan().bold().to_string())
        } else {
            render_template_with(template, values, str::to_string)
        }
    }

    fn emphasize(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Keys in the first column, bold when colored.
    fn render_key_value_table(&self, prefix: &str, rows: &[(String, String)], padding: usize) -> String {
        let mut table = borderless_table();
        for (key, value) in rows {
            table.add_row(vec![Cell::new(self.emphasize(key)), Cell::new(value)]);
        }
        finish_table(table, prefix, padding)
    }

    /// First row is the header.
    fn render_table(&self, prefix: &str, rows: &[Vec<String>], padding: usize) -> String {
        let Some((header, body)) = rows.split_first() else {
            return String::new();
        };
        let mut table = borderless_table();
        table.set_header(header.iter().map(|h| Cell::new(self.emphasize(h))));
        for row in body {
            table.add_row(row.iter().map(|c| Cell::new(c).set_alignment(CellAlignment::Left)));
        }
        finish_table(table, prefix, padding)
    }
}

fn borderless_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Disabled);
    table
}

fn finish_table(mut table: Table, prefix: &str, padding: usize) -> String {
    for column in table.column_iter_mut() {
        column.set_padding((0, padding as u16));
    }
    table
        .lines()
        .map(|line| format!("{}{}\n", prefix, line.trim_end()))
        .collect()
}

fn input_error(e: dialoguer::Error) -> CommandError {
    CommandError::Ui(format!("Failed to get user input: {}", e))
}

impl Ui for TerminalUi {
    fn display_text_with_flavor(&self, template: &str, values: Values<'_>) {
        println!("{}", self.flavor(template, values));
    }

    fn display_newline(&self) {
        println!();
    }

    fn display_ok(&self) {
        if self.color {
            println!("{}", "OK".green().bold());
        } else {
            println!("OK");
        }
    }

    fn display_warning(&self, template: &str, values: Values<'_>) {
        eprintln!("{}", self.flavor(template, values));
    }

    fn display_key_value_table(&self, prefix: &str, rows: &[(String, String)], padding: usize) {
        print!("{}", self.render_key_value_table(prefix, rows, padding));
    }

    fn display_table(&self, prefix: &str, rows: &[Vec<String>], padding: usize) {
        print!("{}", self.render_table(prefix, rows, padding));
    }

    fn display_log_message(&self, message: &LogMessage, _display_header: bool) {
        for line in format_log_message(message) {
            if self.color && message.message_type == LogMessageType::Err {
                println!("{}", line.red());
            } else {
                println!("{}", line);
            }
        }
    }

    fn display_bool_prompt(
        &self,
        default: bool,
        template: &str,
        values: Values<'_>,
    ) -> Result<bool, CommandError> {
        Confirm::new()
            .with_prompt(self.flavor(template, values))
            .default(default)
            .interact()
            .map_err(input_error)
    }

    fn display_text_prompt(&self, template: &str, values: Values<'_>) -> Result<String, CommandError> {
        Input::<String>::new()
            .with_prompt(self.flavor(template, values))
            .interact_text()
            .map_err(input_error)
    }

    fn display_password_prompt(
        &self,
        template: &str,
        values: Values<'_>,
    ) -> Result<String, CommandError> {
        Password::new()
            .with_prompt(self.flavor(template, values))
            .allow_empty_password(true)
            .interact()
            .map_err(input_error)
    }

    fn display_text_menu(
        &self,
        choices: &[String],
        template: &str,
        values: Values<'_>,
    ) -> Result<String, CommandError> {
        if choices.len() >= MAX_MENU_CHOICES {
            let answer = self.display_text_prompt(template, values)?;
            return resolve_menu_choice(choices, &answer);
        }
        let index = Select::new()
            .with_prompt(self.flavor(template, values))
            .items(choices)
            .default(0)
            .interact()
            .map_err(input_error)?;
        choices
            .get(index)
            .cloned()
            .ok_or_else(|| CommandError::Ui(format!("Invalid choice: {}", index)))
    }
}
