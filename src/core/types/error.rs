//! Failure types for privilege reduction

use crate::windows::utils::ErrorCode;
use thiserror::Error;

/// Which step of a reduction failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The caller supplied no privilege names
    NoPrivileges,
    /// The target's token could not be opened
    OpenToken,
    /// A privilege name could not be resolved to an identifier
    Lookup,
    /// The token refused the removal request
    Adjust,
}

/// A single failed step.
///
/// The `Display` form is the human-readable line shown to users.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReductionError {
    #[error("No privileges provided to reduce.")]
    NoPrivilegesProvided,

    #[error("Failed to open process token. Error code: {code}")]
    OpenToken { code: ErrorCode },

    #[error("Failed to lookup privilege value {privilege}. Error code: {code}")]
    Lookup { privilege: String, code: ErrorCode },

    #[error("Failed to adjust privilege {privilege}. Error code: {code}")]
    Adjust { privilege: String, code: ErrorCode },
}

impl ReductionError {
    /// Creates a lookup failure for a privilege name
    pub fn lookup(privilege: impl Into<String>, code: ErrorCode) -> Self {
        ReductionError::Lookup {
            privilege: privilege.into(),
            code,
        }
    }

    /// Creates an adjustment failure for a privilege name
    pub fn adjust(privilege: impl Into<String>, code: ErrorCode) -> Self {
        ReductionError::Adjust {
            privilege: privilege.into(),
            code,
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            ReductionError::NoPrivilegesProvided => FailureKind::NoPrivileges,
            ReductionError::OpenToken { .. } => FailureKind::OpenToken,
            ReductionError::Lookup { .. } => FailureKind::Lookup,
            ReductionError::Adjust { .. } => FailureKind::Adjust,
        }
    }

    /// Platform error code, if the failure came from the OS
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            ReductionError::NoPrivilegesProvided => None,
            ReductionError::OpenToken { code }
            | ReductionError::Lookup { code, .. }
            | ReductionError::Adjust { code, .. } => Some(*code),
        }
    }

    /// Privilege name the failure belongs to, if any
    pub fn privilege(&self) -> Option<&str> {
        match self {
            ReductionError::Lookup { privilege, .. } | ReductionError::Adjust { privilege, .. } => {
                Some(privilege.as_str())
            }
            _ => None,
        }
    }

    /// True for failures that abort the whole reduction
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ReductionError::NoPrivilegesProvided | ReductionError::OpenToken { .. }
        )
    }
}
