//! Property-based tests for UI text layout

use cfcli::ui::{render_key_value_table, render_table, render_template};
use proptest::prelude::*;

/// Substituted values appear verbatim and no placeholder survives
#[test]
fn test_template_substitution_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &("[a-z0-9 .-]{0,20}", "[a-z0-9 .-]{0,20}", "[a-zA-Z .]{0,10}"),
            |(app, org, text)| {
                let template = format!("{}{{AppName}} in {{OrgName}}", text);
                let rendered = render_template(&template, &[("AppName", app.as_str()), ("OrgName", org.as_str())]);
                assert_eq!(rendered, format!("{}{} in {}", text, app, org));
                assert!(!rendered.contains("{AppName}"));

                Ok(())
            },
        )
        .unwrap();
}

/// Values in a key/value table all start in the same column
#[test]
fn test_key_value_alignment_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(
                prop::collection::vec(("[a-z]{1,12}:", "[a-z0-9]{1,12}"), 1..8),
                1usize..5,
            ),
            |(rows, padding)| {
                let rows: Vec<(String, String)> = rows;
                let out = render_key_value_table("", &rows, padding);
                let widest = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
                for (line, (_, value)) in out.lines().zip(&rows) {
                    assert_eq!(&line[widest + padding..], value.as_str());
                }

                Ok(())
            },
        )
        .unwrap();
}

/// Every table line has one row per input row and keeps cells in order
#[test]
fn test_table_columns_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &prop::collection::vec(prop::collection::vec("[a-z0-9]{1,10}", 3), 1..8),
            |rows| {
                let out = render_table("", &rows, 3);
                assert_eq!(out.lines().count(), rows.len());
                for (line, row) in out.lines().zip(&rows) {
                    let cells: Vec<&str> = line.split_whitespace().collect();
                    assert_eq!(cells, row.iter().map(String::as_str).collect::<Vec<_>>());
                }

                Ok(())
            },
        )
        .unwrap();
}
