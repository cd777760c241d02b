//! Buffered UI output and prompts

use cfcli::ui::{BufferedUi, Ui};

#[test]
fn test_text_and_warnings_split_streams() {
    let ui = BufferedUi::new();
    ui.display_text_with_flavor(
        "Creating space {SpaceName} as {Username}...",
        &[("SpaceName", "dev"), ("Username", "steve")],
    );
    ui.display_warning("Space {SpaceName} already exists", &[("SpaceName", "dev")]);
    ui.display_newline();
    ui.display_ok();

    assert_eq!(ui.out(), "Creating space dev as steve...\n\nOK\n");
    assert_eq!(ui.err(), "Space dev already exists\n");
}

#[test]
fn test_tables() {
    let ui = BufferedUi::new();
    ui.display_key_value_table(
        "",
        &[
            ("name:".to_string(), "acme".to_string()),
            ("spaces:".to_string(), String::new()),
        ],
        3,
    );
    ui.display_table(
        "",
        &[
            vec!["name".to_string(), "state".to_string()],
            vec!["some-app".to_string(), "started".to_string()],
        ],
        3,
    );
    assert_eq!(
        ui.out(),
        "name:     acme\nspaces:\nname       state\nsome-app   started\n"
    );
}

#[test]
fn test_bool_prompt_answers() {
    let ui = BufferedUi::with_input(&["YES", "", "n"]);
    assert!(ui.display_bool_prompt(false, "Really delete?", &[]).unwrap());
    assert!(ui.display_bool_prompt(true, "Really delete?", &[]).unwrap());
    assert!(!ui.display_bool_prompt(true, "Really delete?", &[]).unwrap());
    assert_eq!(ui.out().matches("Really delete? [yN]:").count(), 1);
    assert_eq!(ui.out().matches("Really delete? [Yn]:").count(), 2);
}

#[test]
fn test_text_menu_by_number_and_name() {
    let ui = BufferedUi::with_input(&["2", "dev"]);
    let choices = vec!["prod".to_string(), "staging".to_string(), "dev".to_string()];
    assert_eq!(ui.display_text_menu(&choices, "Space", &[]).unwrap(), "staging");
    assert_eq!(ui.display_text_menu(&choices, "Space", &[]).unwrap(), "dev");
}
