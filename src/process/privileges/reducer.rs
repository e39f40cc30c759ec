//! Permanent removal of privileges from a process token

use super::api::TokenApi;
use crate::core::types::{LuidAndAttributes, ProcessRef, ReductionError, ReductionReport};
use tracing::{debug, info, warn};

/// Strips privileges from a process token.
///
/// A reduction never panics and never returns `Err`: every failed step is
/// recorded in the returned [`ReductionReport`]. Only a token that cannot be
/// opened stops the run early. Removed privileges stay gone until the target
/// process exits.
pub struct PrivilegeReducer<A> {
    api: A,
}

impl<A: TokenApi> PrivilegeReducer<A> {
    /// Create a reducer over a specific `TokenApi`
    pub fn with_api(api: A) -> Self {
        PrivilegeReducer { api }
    }

    /// Remove every named privilege from `process` (the calling process when `None`).
    ///
    /// Names are not validated up front. A name that fails lookup is reported
    /// and skipped; the remaining names are still processed in order.
    pub fn reduce<S: AsRef<str>>(
        &self,
        process: Option<&ProcessRef>,
        privileges: &[S],
    ) -> ReductionReport {
        if privileges.is_empty() {
            warn!("no privileges supplied, token left untouched");
            return ReductionReport::no_privileges();
        }

        let target = ProcessRef::resolve(process);
        let mut report = ReductionReport::new();

        let token = match self.api.open_token(&target) {
            Ok(token) => token,
            Err(code) => {
                warn!(
                    process = %target,
                    %code,
                    reason = code.description(),
                    "failed to open process token"
                );
                report.push(ReductionError::OpenToken { code });
                return report;
            }
        };
        debug!(process = %target, "opened process token");

        let mut removed = 0usize;
        for name in privileges {
            let name = name.as_ref();

            let luid = match self.api.lookup_privilege(name) {
                Ok(luid) => luid,
                Err(code) => {
                    warn!(
                        privilege = name,
                        %code,
                        reason = code.description(),
                        "privilege lookup failed"
                    );
                    report.push(ReductionError::lookup(name, code));
                    continue;
                }
            };
            debug!(privilege = name, %luid, "resolved privilege");

            match self.api.adjust_token(&token, &LuidAndAttributes::removed(luid)) {
                Ok(()) => {
                    debug!(privilege = name, "privilege removed");
                    removed += 1;
                }
                Err(code) => {
                    warn!(
                        privilege = name,
                        %code,
                        reason = code.description(),
                        "privilege removal failed"
                    );
                    report.push(ReductionError::adjust(name, code));
                }
            }
        }

        info!(
            process = %target,
            removed,
            failed = report.len(),
            "privilege reduction finished"
        );
        report
    }

    /// Same as [`reduce`](Self::reduce), flattened to display lines.
    ///
    /// An empty list means every privilege was removed.
    pub fn remove_privileges<S: AsRef<str>>(
        &self,
        process: Option<&ProcessRef>,
        privileges: &[S],
    ) -> Vec<String> {
        self.reduce(process, privileges).messages()
    }
}

#[cfg(windows)]
impl PrivilegeReducer<super::system::WindowsTokenApi> {
    /// Create a reducer that talks to the local machine
    pub fn new() -> Self {
        Self::with_api(super::system::WindowsTokenApi::new())
    }
}

#[cfg(windows)]
impl Default for PrivilegeReducer<super::system::WindowsTokenApi> {
    fn default() -> Self {
        Self::new()
    }
}

/// Remove privileges from a process token on the local machine.
///
/// Returns one message per failed step; an empty list means full success.
#[cfg(windows)]
pub fn remove_privileges<S: AsRef<str>>(
    process: Option<&ProcessRef>,
    privileges: &[S],
) -> Vec<String> {
    PrivilegeReducer::new().remove_privileges(process, privileges)
}
