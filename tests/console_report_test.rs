//! End-to-end rendering of reductions as console output

mod common;

use common::{ScriptedTokenApi, SHUTDOWN, UNDOCK};
use pretty_assertions::assert_eq;
use std::io;
use privilege_reducer::console::{prompt_and_wait, EXIT_PROMPT};
use privilege_reducer::report::{render, write_report, FAILURE_HEADER, SUCCESS_MESSAGE};
use privilege_reducer::{ErrorCode, PrivilegeReducer};

fn output_for(api: &ScriptedTokenApi, names: &[&str]) -> String {
    let report = PrivilegeReducer::with_api(api).reduce(None, names);
    let mut out = Vec::new();
    write_report(&mut out, &report).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_success_output() {
    let api = ScriptedTokenApi::standard();
    assert_eq!(output_for(&api, &[UNDOCK, SHUTDOWN]), format!("{}\n", SUCCESS_MESSAGE));
}

#[test]
fn test_failure_output() {
    let api = ScriptedTokenApi::standard().not_holding(SHUTDOWN);
    assert_eq!(
        output_for(&api, &[UNDOCK, SHUTDOWN, "SeUndokPrivilege"]),
        [
            FAILURE_HEADER,
            "Failed to adjust privilege SeShutdownPrivilege. Error code: 1300",
            "Failed to lookup privilege value SeUndokPrivilege. Error code: 1313",
            "",
        ]
        .join("\n")
    );
}

#[test]
fn test_refused_token_output() {
    let api = ScriptedTokenApi::standard().refusing_token(ErrorCode::Unknown(1346));
    let report = PrivilegeReducer::with_api(&api).reduce(None, &[UNDOCK, SHUTDOWN]);

    assert_eq!(
        render(&report),
        vec![
            FAILURE_HEADER.to_string(),
            "Failed to open process token. Error code: 1346".to_string(),
        ]
    );
}

#[test]
fn test_empty_request_output() {
    let api = ScriptedTokenApi::standard();
    assert_eq!(
        output_for(&api, &[]),
        format!("{}\nNo privileges provided to reduce.\n", FAILURE_HEADER)
    );
}

#[test]
fn test_exit_prompt_follows_report() {
    let api = ScriptedTokenApi::standard();
    let report = PrivilegeReducer::with_api(&api).reduce(None, &[UNDOCK, SHUTDOWN]);
    let mut out = Vec::new();
    let mut keys: &[u8] = b"xy";

    write_report(&mut out, &report).unwrap();
    prompt_and_wait(&mut out, &mut keys).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Privileges adjusted successfully.\nPress any key to exit...\n"
    );
    assert_eq!(keys, &b"y"[..]);
}

#[test]
fn test_exit_prompt_returns_at_end_of_input() {
    let api = ScriptedTokenApi::standard().refusing_token(ErrorCode::AccessDenied);
    let report = PrivilegeReducer::with_api(&api).reduce(None, &[UNDOCK, SHUTDOWN]);
    let mut out = Vec::new();

    write_report(&mut out, &report).unwrap();
    prompt_and_wait(&mut out, &mut io::empty()).unwrap();

    let output = String::from_utf8(out).unwrap();
    assert_eq!(
        output,
        [
            FAILURE_HEADER,
            "Failed to open process token. Error code: 5",
            EXIT_PROMPT,
            "",
        ]
        .join("\n")
    );
    assert!(output.ends_with("Press any key to exit...\n"));
}
