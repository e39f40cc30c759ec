//! OS operations the reducer depends on

use crate::core::types::{Luid, LuidAndAttributes, ProcessRef};
use crate::windows::utils::ErrorCode;

/// The three token operations a reduction performs.
///
/// Every call is a single blocking OS request. Failures carry the
/// platform error code and nothing else.
pub trait TokenApi {
    /// Open token handle. Dropping it releases the handle.
    type Token;

    /// Open `process`'s token with the adjust-privileges right only
    fn open_token(&self, process: &ProcessRef) -> Result<Self::Token, ErrorCode>;

    /// Resolve a privilege name on the local system
    fn lookup_privilege(&self, name: &str) -> Result<Luid, ErrorCode>;

    /// Apply one adjustment entry to the token, leaving other privileges alone
    fn adjust_token(&self, token: &Self::Token, entry: &LuidAndAttributes) -> Result<(), ErrorCode>;
}

impl<T: TokenApi + ?Sized> TokenApi for &T {
    type Token = T::Token;

    fn open_token(&self, process: &ProcessRef) -> Result<Self::Token, ErrorCode> {
        (**self).open_token(process)
    }

    fn lookup_privilege(&self, name: &str) -> Result<Luid, ErrorCode> {
        (**self).lookup_privilege(name)
    }

    fn adjust_token(&self, token: &Self::Token, entry: &LuidAndAttributes) -> Result<(), ErrorCode> {
        (**self).adjust_token(token, entry)
    }
}
