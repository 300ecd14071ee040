//! Session cookie storage.

use pyload_core::SessionState;
use std::sync::{PoisonError, RwLock};

/// Holds the session cookie shared by every clone of a client.
///
/// Written only by a successful login and read by every request.
#[derive(Debug, Default)]
pub struct Session {
    cookie: RwLock<Option<String>>,
}

impl Session {
    pub fn cookie(&self) -> Option<String> {
        self.cookie
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn store(&self, cookie: String) {
        *self.cookie.write().unwrap_or_else(PoisonError::into_inner) = Some(cookie);
    }

    pub fn state(&self) -> SessionState {
        if self
            .cookie
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
        {
            SessionState::Authenticated
        } else {
            SessionState::Unauthenticated
        }
    }
}

/// Extract the `name=value` pair from a `Set-Cookie` header value.
pub fn cookie_pair(set_cookie: &str) -> Option<String> {
    let pair = set_cookie.split(';').next()?.trim();
    let (name, _) = pair.split_once('=')?;
    if name.trim().is_empty() {
        return None;
    }
    Some(pair.to_string())
}
