//! Tests against the real token of the test process

#![cfg(windows)]

use privilege_reducer::{
    names, remove_privileges, ErrorCode, FailureKind, PrivilegeReducer, ProcessRef, TokenApi,
    WindowsTokenApi,
};

#[test]
#[cfg_attr(miri, ignore = "FFI not supported in Miri")]
fn test_empty_list_on_current_process() {
    let none: [&str; 0] = [];
    assert_eq!(
        remove_privileges(None, &none),
        vec!["No privileges provided to reduce.".to_string()]
    );
}

#[test]
#[cfg_attr(miri, ignore = "FFI not supported in Miri")]
fn test_unknown_privilege_is_lookup_failure() {
    let report = PrivilegeReducer::new().reduce(None, &["SeNonexistentPrivilege"]);

    assert_eq!(report.len(), 1);
    let failure = &report.errors()[0];
    assert_eq!(failure.kind(), FailureKind::Lookup);
    assert_eq!(failure.code(), Some(ErrorCode::NoSuchPrivilege));
}

#[test]
#[cfg_attr(miri, ignore = "FFI not supported in Miri")]
fn test_second_removal_fails() {
    let reducer = PrivilegeReducer::new();
    // The first attempt may or may not succeed depending on the test account
    let _ = reducer.reduce(Some(&ProcessRef::Current), &[names::SE_UNDOCK_NAME]);

    let report = reducer.reduce(Some(&ProcessRef::Current), &[names::SE_UNDOCK_NAME]);
    assert_eq!(report.len(), 1);
    assert_eq!(report.errors()[0].kind(), FailureKind::Adjust);
    assert_eq!(report.errors()[0].code(), Some(ErrorCode::NotAllAssigned));
}

#[test]
#[cfg_attr(miri, ignore = "FFI not supported in Miri")]
fn test_missing_process_cannot_open_token() {
    let report =
        PrivilegeReducer::new().reduce(Some(&ProcessRef::Pid(0xFFFF_FFFF)), &[names::SE_SHUTDOWN_NAME]);

    assert_eq!(report.len(), 1);
    assert_eq!(report.errors()[0].kind(), FailureKind::OpenToken);
}

#[test]
#[cfg_attr(miri, ignore = "FFI not supported in Miri")]
fn test_lookup_is_stable() {
    let api = WindowsTokenApi::new();
    let first = api.lookup_privilege(names::SE_SHUTDOWN_NAME).unwrap();
    let second = api.lookup_privilege(names::SE_SHUTDOWN_NAME).unwrap();
    assert_eq!(first, second);
}
