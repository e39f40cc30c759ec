//! Privilege identifiers and fixed-layout adjustment records

use std::fmt;

/// Access right needed on a token to change its privileges
pub const TOKEN_ADJUST_PRIVILEGES: u32 = 0x0020;

/// Attribute marking a privilege as permanently removed from a token
pub const SE_PRIVILEGE_REMOVED: u32 = 0x0000_0004;

/// Well-known privilege names understood by `LookupPrivilegeValueW`.
///
/// The reducer accepts any string; these are here so call sites do not
/// have to spell them out.
pub mod names {
    pub const SE_ASSIGNPRIMARYTOKEN_NAME: &str = "SeAssignPrimaryTokenPrivilege";
    pub const SE_BACKUP_NAME: &str = "SeBackupPrivilege";
    pub const SE_CHANGE_NOTIFY_NAME: &str = "SeChangeNotifyPrivilege";
    pub const SE_CREATE_TOKEN_NAME: &str = "SeCreateTokenPrivilege";
    pub const SE_DEBUG_NAME: &str = "SeDebugPrivilege";
    pub const SE_IMPERSONATE_NAME: &str = "SeImpersonatePrivilege";
    pub const SE_INC_WORKING_SET_NAME: &str = "SeIncreaseWorkingSetPrivilege";
    pub const SE_LOAD_DRIVER_NAME: &str = "SeLoadDriverPrivilege";
    pub const SE_REMOTE_SHUTDOWN_NAME: &str = "SeRemoteShutdownPrivilege";
    pub const SE_RESTORE_NAME: &str = "SeRestorePrivilege";
    pub const SE_SECURITY_NAME: &str = "SeSecurityPrivilege";
    pub const SE_SHUTDOWN_NAME: &str = "SeShutdownPrivilege";
    pub const SE_SYSTEMTIME_NAME: &str = "SeSystemtimePrivilege";
    pub const SE_TAKE_OWNERSHIP_NAME: &str = "SeTakeOwnershipPrivilege";
    pub const SE_TCB_NAME: &str = "SeTcbPrivilege";
    pub const SE_TIME_ZONE_NAME: &str = "SeTimeZonePrivilege";
    pub const SE_UNDOCK_NAME: &str = "SeUndockPrivilege";
}

/// Locally unique identifier the OS assigns to a privilege.
///
/// Same field order and widths as the Win32 `LUID`. Values are only
/// meaningful on the machine (and boot) that produced them.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Luid {
    pub low_part: u32,
    pub high_part: i32,
}

impl Luid {
    pub const fn new(low_part: u32, high_part: i32) -> Self {
        Luid {
            low_part,
            high_part,
        }
    }
}

impl fmt::Display for Luid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}:{:#x}", self.high_part, self.low_part)
    }
}

/// One `(identifier, attributes)` entry of a token adjustment request.
///
/// Requests always carry exactly one of these, matching a `TOKEN_PRIVILEGES`
/// with `PrivilegeCount == 1`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuidAndAttributes {
    pub luid: Luid,
    pub attributes: u32,
}

impl LuidAndAttributes {
    /// Request that strips `luid` from the token for good
    pub const fn removed(luid: Luid) -> Self {
        LuidAndAttributes {
            luid,
            attributes: SE_PRIVILEGE_REMOVED,
        }
    }

    /// Check whether this entry asks for removal
    pub fn is_removal(&self) -> bool {
        self.attributes & SE_PRIVILEGE_REMOVED != 0
    }
}
