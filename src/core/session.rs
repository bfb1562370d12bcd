//! Session token validation and storage
//!
//! The backend issues a JWT-style bearer token at login. The client never
//! verifies the signature; it only decodes the payload to gate navigation
//! and pick display data. Authorization proper stays on the server, which
//! re-checks the token on every API call.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

/// Storage key for the bearer token in localStorage
pub const TOKEN_STORAGE_KEY: &str = "lendwise_token";

/// Storage key for the opaque user blob written at login.
/// The session layer never parses it.
pub const USER_STORAGE_KEY: &str = "lendwise_user";

/// Actor role carried in the token's `role` claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Customer,
    Bank,
}

impl Role {
    /// Map the raw `role` claim onto a role. Bank officers log in through
    /// the bank portal and get a `bank` (or legacy `officer`) claim;
    /// everything else is treated as a customer.
    pub fn from_claim(claim: Option<&str>) -> Self {
        match claim {
            Some("bank") | Some("officer") => Role::Bank,
            _ => Role::Customer,
        }
    }
}

/// Claims the client reads out of the token payload.
/// Unknown claims are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TokenClaims {
    /// Expiry, seconds since epoch
    pub exp: Option<i64>,
    pub id: Option<String>,
    #[serde(rename = "customerId")]
    pub customer_id: Option<String>,
    pub sub: Option<String>,
    pub role: Option<String>,
}

impl TokenClaims {
    /// Subject identifier with fixed fallback order: `id`, then
    /// `customerId`, then `sub`. First match wins.
    pub fn subject_id(&self) -> Option<&str> {
        self.id
            .as_deref()
            .or(self.customer_id.as_deref())
            .or(self.sub.as_deref())
    }

    pub fn role(&self) -> Role {
        Role::from_claim(self.role.as_deref())
    }
}

/// Decode the payload segment of a token without verifying anything.
/// Returns `None` on any structural or decode failure.
pub fn decode_token(token: &str) -> Option<TokenClaims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Subject identifier straight from a raw token, for pages that need the
/// customer id in a URL. Display/routing convenience only.
pub fn subject_id_from_token(token: &str) -> Option<String> {
    decode_token(token).and_then(|c| c.subject_id().map(str::to_string))
}

/// Outcome of evaluating the stored session on a protected-view mount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionVerdict {
    /// No token in the store
    NoToken,
    /// Wrong segment count, or the payload is not Base64URL-encoded JSON
    Malformed,
    /// Structurally fine but `exp` is in the past
    Expired,
    Valid,
}

impl SessionVerdict {
    pub fn is_valid(self) -> bool {
        matches!(self, SessionVerdict::Valid)
    }
}

/// Evaluate a raw token against the clock. Pure; no storage access.
///
/// A token with no `exp` claim never expires client-side.
pub fn evaluate_token(token: Option<&str>, now: i64) -> SessionVerdict {
    let Some(token) = token else {
        return SessionVerdict::NoToken;
    };
    if token.split('.').count() != 3 {
        return SessionVerdict::Malformed;
    }
    let Some(claims) = decode_token(token) else {
        return SessionVerdict::Malformed;
    };
    match claims.exp {
        Some(exp) if exp < now => SessionVerdict::Expired,
        _ => SessionVerdict::Valid,
    }
}

/// Single-slot store for the raw session token
pub trait SessionStore {
    fn read(&self) -> Option<String>;
    fn write(&self, token: &str);
    fn clear(&self);
}

/// In-memory store used by tests and as the server-side stand-in
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: std::cell::RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.write(token);
        store
    }
}

impl SessionStore for MemoryStore {
    fn read(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn write(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}

/// localStorage-backed store, client only
#[cfg(not(feature = "ssr"))]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStore;

#[cfg(not(feature = "ssr"))]
impl SessionStore for BrowserStore {
    fn read(&self) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(TOKEN_STORAGE_KEY).ok()?
    }

    fn write(&self, token: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
            }
        }
    }

    fn clear(&self) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(TOKEN_STORAGE_KEY);
            }
        }
    }
}

/// Gate for protected views: reads the store, evaluates the token, and
/// clears the slot when the token is malformed or expired so a stale
/// credential is not re-evaluated on the next mount. An absent token
/// performs no storage mutation.
///
/// The original UI cleared storage on expiry but not consistently on
/// malformed tokens; here any invalid token clears the slot.
pub struct SessionGuard<S> {
    store: S,
}

impl<S: SessionStore> SessionGuard<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Evaluate the stored token at the given wall-clock second
    pub fn check_at(&self, now: i64) -> SessionVerdict {
        let token = self.store.read();
        let verdict = evaluate_token(token.as_deref(), now);
        match verdict {
            SessionVerdict::Malformed | SessionVerdict::Expired => {
                leptos::logging::warn!("session token rejected ({verdict:?}), clearing storage");
                self.store.clear();
            }
            SessionVerdict::NoToken | SessionVerdict::Valid => {}
        }
        verdict
    }

    /// Evaluate the stored token against the current time
    pub fn check(&self) -> SessionVerdict {
        self.check_at(now_epoch_seconds())
    }

    pub fn is_valid_at(&self, now: i64) -> bool {
        self.check_at(now).is_valid()
    }

    pub fn is_valid(&self) -> bool {
        self.check().is_valid()
    }

    /// Claims of the currently stored token, if it decodes
    pub fn claims(&self) -> Option<TokenClaims> {
        self.store.read().as_deref().and_then(decode_token)
    }
}

/// Guard over the browser's localStorage slot
#[cfg(not(feature = "ssr"))]
pub fn browser_guard() -> SessionGuard<BrowserStore> {
    SessionGuard::new(BrowserStore)
}

/// Server-side stand-in; there is never a session on the server
#[cfg(feature = "ssr")]
pub fn browser_guard() -> SessionGuard<MemoryStore> {
    SessionGuard::new(MemoryStore::new())
}

/// Current wall-clock time in whole seconds since the epoch
#[cfg(not(feature = "ssr"))]
pub fn now_epoch_seconds() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

#[cfg(feature = "ssr")]
pub fn now_epoch_seconds() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// Raw token from the browser store, for attaching the bearer header
#[cfg(not(feature = "ssr"))]
pub fn stored_token() -> Option<String> {
    BrowserStore.read()
}

#[cfg(feature = "ssr")]
pub fn stored_token() -> Option<String> {
    None
}
