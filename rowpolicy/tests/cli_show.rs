//! CLI tests for `rowpolicy show` and `rowpolicy disable`.
//!
//! Spawns the binary and checks the printed decision for a few state/button
//! pairs, including labels outside the known sets.

use std::process::Command;

use rowpolicy::exit_codes;

fn decide(args: &[&str]) -> (Option<i32>, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_rowpolicy"))
        .args(args)
        .output()
        .expect("rowpolicy");
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    (output.status.code(), stdout.trim().to_string())
}

#[test]
fn show_edit_without_state_is_true() {
    assert_eq!(decide(&["show", "edit"]), (Some(exit_codes::OK), "true".to_string()));
}

#[test]
fn show_update_on_default_row_is_false() {
    assert_eq!(
        decide(&["show", "update", "--state", "default"]),
        (Some(exit_codes::OK), "false".to_string())
    );
}

#[test]
fn show_unknown_button_is_false_not_an_error() {
    assert_eq!(
        decide(&["show", "archive", "--state", "editing"]),
        (Some(exit_codes::OK), "false".to_string())
    );
}

#[test]
fn disable_update_while_editing_is_true() {
    assert_eq!(
        decide(&["disable", "update", "--state", "editing"]),
        (Some(exit_codes::OK), "true".to_string())
    );
}

#[test]
fn disable_unknown_state_is_false() {
    assert_eq!(
        decide(&["disable", "delete", "--state", "archived"]),
        (Some(exit_codes::OK), "false".to_string())
    );
}
