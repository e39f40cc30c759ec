//! Kernel32.dll bindings for process handles

use crate::windows::utils::ErrorCode;
use winapi::shared::minwindef::FALSE;
use winapi::um::handleapi::CloseHandle;
use winapi::um::processthreadsapi::{GetCurrentProcess, OpenProcess};
use winapi::um::winnt::{HANDLE, PROCESS_QUERY_LIMITED_INFORMATION};

/// Pseudo-handle for the calling process. It never needs closing.
pub fn current_process() -> HANDLE {
    unsafe { GetCurrentProcess() }
}

/// Safe wrapper for OpenProcess
pub fn open_process(pid: u32, desired_access: u32) -> Result<HANDLE, ErrorCode> {
    unsafe {
        let handle = OpenProcess(desired_access, FALSE, pid);
        if handle.is_null() {
            Err(ErrorCode::last_error())
        } else {
            Ok(handle)
        }
    }
}

/// Open a process with just enough access to open its token
pub fn open_process_for_token(pid: u32) -> Result<HANDLE, ErrorCode> {
    open_process(pid, PROCESS_QUERY_LIMITED_INFORMATION)
}

/// Safe wrapper for CloseHandle
///
/// # Safety
/// The handle must be a valid Windows handle owned by the caller
pub unsafe fn close_handle(handle: HANDLE) -> Result<(), ErrorCode> {
    if handle.is_null() {
        return Ok(());
    }

    if CloseHandle(handle) == FALSE {
        Err(ErrorCode::last_error())
    } else {
        Ok(())
    }
}
