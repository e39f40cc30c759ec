//! Ordered outcome of a privilege reduction

use super::error::{FailureKind, ReductionError};

/// Failures collected while reducing a token, in processing order.
///
/// An empty report means every requested privilege was removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReductionReport {
    errors: Vec<ReductionError>,
}

impl ReductionReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report for a call that was given nothing to do
    pub fn no_privileges() -> Self {
        ReductionReport {
            errors: vec![ReductionError::NoPrivilegesProvided],
        }
    }

    pub fn push(&mut self, error: ReductionError) {
        self.errors.push(error);
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ReductionError] {
        &self.errors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReductionError> {
        self.errors.iter()
    }

    /// Failures of one kind, in order
    pub fn of_kind(&self, kind: FailureKind) -> impl Iterator<Item = &ReductionError> {
        self.errors.iter().filter(move |e| e.kind() == kind)
    }

    /// Human-readable lines, one per failure
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

impl From<ReductionReport> for Vec<String> {
    fn from(report: ReductionReport) -> Self {
        report.messages()
    }
}

impl IntoIterator for ReductionReport {
    type Item = ReductionError;
    type IntoIter = std::vec::IntoIter<ReductionError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ReductionReport {
    type Item = &'a ReductionError;
    type IntoIter = std::slice::Iter<'a, ReductionError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
