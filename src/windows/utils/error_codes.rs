//! Windows error code handling utilities

use std::fmt;

/// Win32 error codes surfaced by the token and privilege calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Success,
    InvalidFunction,
    AccessDenied,
    InvalidHandle,
    InvalidParameter,
    NotAllAssigned,
    NoSuchPrivilege,
    PrivilegeNotHeld,
    Unknown(u32),
}

impl From<u32> for ErrorCode {
    fn from(code: u32) -> Self {
        match code {
            0 => ErrorCode::Success,
            1 => ErrorCode::InvalidFunction,
            5 => ErrorCode::AccessDenied,
            6 => ErrorCode::InvalidHandle,
            87 => ErrorCode::InvalidParameter,
            1300 => ErrorCode::NotAllAssigned,
            1313 => ErrorCode::NoSuchPrivilege,
            1314 => ErrorCode::PrivilegeNotHeld,
            _ => ErrorCode::Unknown(code),
        }
    }
}

impl From<ErrorCode> for u32 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl ErrorCode {
    /// Get the last Windows error
    #[cfg(windows)]
    pub fn last_error() -> Self {
        unsafe { ErrorCode::from(winapi::um::errhandlingapi::GetLastError()) }
    }

    /// Raw numeric value as reported by the OS
    pub fn code(&self) -> u32 {
        match self {
            ErrorCode::Success => 0,
            ErrorCode::InvalidFunction => 1,
            ErrorCode::AccessDenied => 5,
            ErrorCode::InvalidHandle => 6,
            ErrorCode::InvalidParameter => 87,
            ErrorCode::NotAllAssigned => 1300,
            ErrorCode::NoSuchPrivilege => 1313,
            ErrorCode::PrivilegeNotHeld => 1314,
            ErrorCode::Unknown(code) => *code,
        }
    }

    /// Short human-readable name
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::Success => "Success",
            ErrorCode::InvalidFunction => "Invalid function",
            ErrorCode::AccessDenied => "Access denied",
            ErrorCode::InvalidHandle => "Invalid handle",
            ErrorCode::InvalidParameter => "Invalid parameter",
            ErrorCode::NotAllAssigned => "Not all privileges referenced are assigned",
            ErrorCode::NoSuchPrivilege => "No such privilege",
            ErrorCode::PrivilegeNotHeld => "Privilege not held",
            ErrorCode::Unknown(_) => "Unknown error",
        }
    }

    /// Message text the system associates with this code
    #[cfg(windows)]
    pub fn system_message(&self) -> String {
        ::windows::core::HRESULT::from_win32(self.code())
            .message()
            .to_string()
    }
}

// Error reports embed the bare number ("Error code: 1313").
impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
