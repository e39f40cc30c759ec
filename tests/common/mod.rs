//! In-memory token API shared by the integration tests

#![allow(dead_code)]

use privilege_reducer::{ErrorCode, Luid, LuidAndAttributes, ProcessRef, TokenApi};
use std::cell::RefCell;
use std::collections::HashSet;

pub const SHUTDOWN: &str = "SeShutdownPrivilege";
pub const UNDOCK: &str = "SeUndockPrivilege";
pub const DEBUG: &str = "SeDebugPrivilege";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Open(ProcessRef),
    Lookup(String),
    Adjust(Luid),
}

/// Token opened by the fake, remembers its process
#[derive(Debug)]
pub struct FakeToken(pub ProcessRef);

/// Behaves like a single token on one machine.
///
/// Names in `vocabulary` resolve to stable identifiers; everything else
/// fails lookup with `NoSuchPrivilege`. Removing a privilege the token no
/// longer holds fails with `NotAllAssigned`.
pub struct ScriptedTokenApi {
    vocabulary: Vec<String>,
    held: RefCell<HashSet<Luid>>,
    open_error: Option<ErrorCode>,
    calls: RefCell<Vec<ApiCall>>,
}

impl ScriptedTokenApi {
    /// Token holding every privilege in `vocabulary`
    pub fn new(vocabulary: &[&str]) -> Self {
        let api = ScriptedTokenApi {
            vocabulary: vocabulary.iter().map(|s| s.to_string()).collect(),
            held: RefCell::new(HashSet::new()),
            open_error: None,
            calls: RefCell::new(Vec::new()),
        };
        let all: HashSet<Luid> = (0..vocabulary.len()).map(Self::luid_at).collect();
        *api.held.borrow_mut() = all;
        api
    }

    /// Default vocabulary used by most tests
    pub fn standard() -> Self {
        Self::new(&[SHUTDOWN, UNDOCK, DEBUG])
    }

    pub fn refusing_token(mut self, code: ErrorCode) -> Self {
        self.open_error = Some(code);
        self
    }

    pub fn not_holding(self, name: &str) -> Self {
        if let Some(luid) = self.luid_of(name) {
            self.held.borrow_mut().remove(&luid);
        }
        self
    }

    pub fn holds(&self, name: &str) -> bool {
        self.luid_of(name)
            .map(|luid| self.held.borrow().contains(&luid))
            .unwrap_or(false)
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    pub fn open_calls(&self) -> usize {
        self.count(|c| matches!(c, ApiCall::Open(_)))
    }

    pub fn lookup_calls(&self) -> usize {
        self.count(|c| matches!(c, ApiCall::Lookup(_)))
    }

    pub fn adjust_calls(&self) -> usize {
        self.count(|c| matches!(c, ApiCall::Adjust(_)))
    }

    pub fn luid_of(&self, name: &str) -> Option<Luid> {
        self.vocabulary
            .iter()
            .position(|known| known == name)
            .map(Self::luid_at)
    }

    fn luid_at(index: usize) -> Luid {
        Luid::new(index as u32 + 2, 0)
    }

    fn count(&self, pred: impl Fn(&ApiCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(*c)).count()
    }
}

impl TokenApi for ScriptedTokenApi {
    type Token = FakeToken;

    fn open_token(&self, process: &ProcessRef) -> Result<FakeToken, ErrorCode> {
        self.calls.borrow_mut().push(ApiCall::Open(*process));
        match self.open_error {
            Some(code) => Err(code),
            None => Ok(FakeToken(*process)),
        }
    }

    fn lookup_privilege(&self, name: &str) -> Result<Luid, ErrorCode> {
        self.calls.borrow_mut().push(ApiCall::Lookup(name.to_string()));
        self.luid_of(name).ok_or(ErrorCode::NoSuchPrivilege)
    }

    fn adjust_token(&self, _token: &FakeToken, entry: &LuidAndAttributes) -> Result<(), ErrorCode> {
        self.calls.borrow_mut().push(ApiCall::Adjust(entry.luid));
        if !entry.is_removal() {
            return Err(ErrorCode::InvalidParameter);
        }
        if self.held.borrow_mut().remove(&entry.luid) {
            Ok(())
        } else {
            Err(ErrorCode::NotAllAssigned)
        }
    }
}
