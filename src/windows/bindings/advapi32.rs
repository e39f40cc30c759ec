//! Advapi32.dll bindings for token and privilege operations

use crate::core::types::{Luid, LuidAndAttributes};
use crate::windows::utils::{string_to_wide, ErrorCode};
use std::ptr;
use winapi::shared::minwindef::FALSE;
use winapi::shared::winerror::ERROR_NOT_ALL_ASSIGNED;
use winapi::um::processthreadsapi::OpenProcessToken;
use winapi::um::securitybaseapi::AdjustTokenPrivileges;
use winapi::um::winbase::LookupPrivilegeValueW;
use winapi::um::winnt::{HANDLE, LUID, LUID_AND_ATTRIBUTES, TOKEN_PRIVILEGES};

/// Safe wrapper for OpenProcessToken
///
/// # Safety
/// `process` must be a valid process handle (or the current-process pseudo-handle)
pub unsafe fn open_process_token(process: HANDLE, desired_access: u32) -> Result<HANDLE, ErrorCode> {
    let mut token: HANDLE = ptr::null_mut();

    if OpenProcessToken(process, desired_access, &mut token) == FALSE {
        Err(ErrorCode::last_error())
    } else {
        Ok(token)
    }
}

/// Resolve a privilege name on the local system
pub fn lookup_privilege_value(name: &str) -> Result<Luid, ErrorCode> {
    let wide_name = string_to_wide(name);
    let mut luid = LUID {
        LowPart: 0,
        HighPart: 0,
    };

    let ok = unsafe { LookupPrivilegeValueW(ptr::null(), wide_name.as_ptr(), &mut luid) };
    if ok == FALSE {
        return Err(ErrorCode::last_error());
    }

    Ok(Luid::new(luid.LowPart, luid.HighPart))
}

/// Apply a single-entry privilege change to a token.
///
/// `AdjustTokenPrivileges` reports success even when the token does not hold
/// the privilege; that case comes back as `ErrorCode::NotAllAssigned`.
///
/// # Safety
/// `token` must be a valid token handle opened with `TOKEN_ADJUST_PRIVILEGES`
pub unsafe fn adjust_token_privileges(
    token: HANDLE,
    entry: &LuidAndAttributes,
) -> Result<(), ErrorCode> {
    let mut privileges = TOKEN_PRIVILEGES {
        PrivilegeCount: 1,
        Privileges: [LUID_AND_ATTRIBUTES {
            Luid: LUID {
                LowPart: entry.luid.low_part,
                HighPart: entry.luid.high_part,
            },
            Attributes: entry.attributes,
        }],
    };

    if AdjustTokenPrivileges(
        token,
        FALSE,
        &mut privileges,
        0,
        ptr::null_mut(),
        ptr::null_mut(),
    ) == FALSE
    {
        return Err(ErrorCode::last_error());
    }

    match ErrorCode::last_error() {
        code if code.code() == ERROR_NOT_ALL_ASSIGNED => Err(code),
        _ => Ok(()),
    }
}
