//! Token operations backed by the Win32 API

use super::api::TokenApi;
use crate::core::types::{Luid, LuidAndAttributes, ProcessRef, TOKEN_ADJUST_PRIVILEGES};
use crate::windows::bindings::{advapi32, kernel32};
use crate::windows::types::Handle;
use crate::windows::utils::ErrorCode;
use tracing::trace;

/// `TokenApi` for the local machine
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsTokenApi;

impl WindowsTokenApi {
    pub fn new() -> Self {
        WindowsTokenApi
    }
}

impl TokenApi for WindowsTokenApi {
    type Token = Handle;

    fn open_token(&self, process: &ProcessRef) -> Result<Handle, ErrorCode> {
        match process {
            ProcessRef::Current => unsafe {
                advapi32::open_process_token(kernel32::current_process(), TOKEN_ADJUST_PRIVILEGES)
                    .map(Handle::new)
            },
            ProcessRef::Pid(pid) => {
                // The process handle is only needed until the token is open
                let process = Handle::new(kernel32::open_process_for_token(*pid)?);
                trace!(pid, "opened target process");
                unsafe {
                    advapi32::open_process_token(process.raw(), TOKEN_ADJUST_PRIVILEGES)
                        .map(Handle::new)
                }
            }
        }
    }

    fn lookup_privilege(&self, name: &str) -> Result<Luid, ErrorCode> {
        advapi32::lookup_privilege_value(name)
    }

    fn adjust_token(&self, token: &Handle, entry: &LuidAndAttributes) -> Result<(), ErrorCode> {
        if token.is_null() {
            return Err(ErrorCode::InvalidHandle);
        }
        unsafe { advapi32::adjust_token_privileges(token.raw(), entry) }
    }
}
