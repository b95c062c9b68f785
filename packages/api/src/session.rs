//! Admin session token holder.

use std::cell::RefCell;
use std::rc::Rc;

/// Fixed local-storage key the token persists under.
const TOKEN_KEY: &str = "adminToken";

/// Bearer credential proving admin authentication.
///
/// The session is constructed once and handed to [`crate::AdminApi`] at
/// construction; there is no ambient per-call storage lookup. The token
/// lives in memory and is written through to browser local storage on the
/// web target, so a reload picks it up again via [`Session::load`].
#[derive(Clone, Default)]
pub struct Session {
    token: Rc<RefCell<Option<String>>>,
}

impl Session {
    /// Load the session, picking up a previously persisted token if there
    /// is one.
    pub fn load() -> Self {
        Self {
            token: Rc::new(RefCell::new(persisted_token())),
        }
    }

    /// Fresh session with no token; nothing is read from storage.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Current bearer token, if the admin is logged in.
    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.borrow().is_some()
    }

    /// Store a fresh token and persist it.
    pub fn store(&self, token: impl Into<String>) {
        let token = token.into();
        persist_token(&token);
        *self.token.borrow_mut() = Some(token);
    }

    /// Drop the token and its persisted copy.
    pub fn clear(&self) {
        remove_persisted_token();
        *self.token.borrow_mut() = None;
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|win| win.local_storage().ok().flatten())
}

#[cfg(target_arch = "wasm32")]
fn persisted_token() -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
}

#[cfg(target_arch = "wasm32")]
fn persist_token(token: &str) {
    match local_storage() {
        Some(storage) if storage.set_item(TOKEN_KEY, token).is_ok() => {}
        _ => tracing::warn!("failed to persist session token"),
    }
}

#[cfg(target_arch = "wasm32")]
fn remove_persisted_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn persisted_token() -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn persist_token(_token: &str) {}

#[cfg(not(target_arch = "wasm32"))]
fn remove_persisted_token() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_lifecycle() {
        let session = Session::empty();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);

        session.store("abc.def.ghi");
        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("abc.def.ghi"));

        session.clear();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn clones_share_the_same_token() {
        let session = Session::empty();
        let handle = session.clone();

        session.store("tok");
        assert_eq!(handle.token().as_deref(), Some("tok"));

        handle.clear();
        assert!(!session.is_authenticated());
    }
}
