//! Global session engine singleton.
//!
//! Hosts that embed the engine behind an FFI or scripting boundary need a
//! process-wide instance; this module provides one behind an `RwLock`,
//! together with accessor functions. In-process Rust callers can just own a
//! [`SessionEngine`] directly and skip this module.

use once_cell::sync::Lazy;
use std::sync::{Arc, RwLock};

use crate::engine::SessionEngine;

/// Global session engine singleton.
pub static SESSION_ENGINE: Lazy<Arc<RwLock<SessionEngine>>> =
    Lazy::new(|| Arc::new(RwLock::new(SessionEngine::new())));

/// Get a read lock on the global session engine.
pub fn get_state() -> std::sync::RwLockReadGuard<'static, SessionEngine> {
    SESSION_ENGINE.read().expect("SESSION_ENGINE lock poisoned")
}

/// Get a write lock on the global session engine.
pub fn get_state_mut() -> std::sync::RwLockWriteGuard<'static, SessionEngine> {
    SESSION_ENGINE.write().expect("SESSION_ENGINE lock poisoned")
}

/// Reset the global engine to a fresh session.
pub fn reset_state() {
    get_state_mut().reset();
}

/// Replace the entire global engine.
pub fn set_state(engine: SessionEngine) {
    *SESSION_ENGINE.write().expect("SESSION_ENGINE lock poisoned") = engine;
}
