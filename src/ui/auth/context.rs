//! Auth context for managing user authentication state
//!
//! Stores the current session (token + decoded claims) in a reactive
//! context, restores it from localStorage on hydration, and drives the
//! login/register/logout flows. The token payload is only decoded here,
//! never verified; the backend re-checks it on every call.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::session::Role;

/// Established session, built from the stored token's claims
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub subject_id: Option<String>,
    pub role: Role,
}

/// Authentication state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    /// Initial state, checking localStorage
    #[default]
    Loading,
    /// User is not authenticated
    Unauthenticated,
    /// User is authenticated
    Authenticated(Session),
}

/// Auth context providing authentication state and actions
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current authentication state
    pub state: RwSignal<AuthState>,
    /// Loading state for auth operations
    pub loading: RwSignal<bool>,
    /// Error message from last operation
    pub error: RwSignal<Option<String>>,
}

impl AuthContext {
    /// Check if user is authenticated
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state.get(), AuthState::Authenticated(_))
    }

    /// Get current session (if authenticated)
    pub fn session(&self) -> Option<Session> {
        match self.state.get() {
            AuthState::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    /// Role of the current session; customer when signed out
    pub fn role(&self) -> Role {
        self.session().map(|s| s.role).unwrap_or_default()
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

/// Provide auth context to the component tree
pub fn provide_auth_context() -> AuthContext {
    // Start with Unauthenticated on both server and client to avoid hydration mismatch
    let state = RwSignal::new(AuthState::Unauthenticated);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let ctx = AuthContext {
        state,
        loading,
        error,
    };

    // Restore the session from localStorage after hydration (client-side only).
    // This is the only place expiry is checked; a session can go stale
    // mid-view until the next protected navigation re-runs the guard.
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            state.set(AuthState::Loading);

            let guard = crate::core::session::browser_guard();
            if guard.check().is_valid() {
                if let Some(session) = restore_session(&guard) {
                    state.set(AuthState::Authenticated(session));
                    return;
                }
            }

            // Invalid verdicts already cleared the token slot; drop the
            // user blob with it
            clear_user_blob();
            state.set(AuthState::Unauthenticated);
        });
    }

    provide_context(ctx);
    ctx
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}

#[cfg(not(feature = "ssr"))]
fn restore_session(
    guard: &crate::core::session::SessionGuard<crate::core::session::BrowserStore>,
) -> Option<Session> {
    use crate::core::session::SessionStore;

    let token = guard.store().read()?;
    let claims = crate::core::session::decode_token(&token)?;
    Some(Session {
        subject_id: claims.subject_id().map(str::to_string),
        role: claims.role(),
        token,
    })
}

/// Login request
#[derive(Debug, Serialize)]
struct LoginRequest {
    email: String,
    password: String,
}

/// Bank login request; the bank endpoints use their own field names
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BankLoginRequest {
    contact_email: String,
    password_hash: String,
}

/// Register request
#[derive(Debug, Serialize)]
struct RegisterRequest {
    name: String,
    email: String,
    password: String,
}

/// Bank register request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BankRegisterRequest {
    pub bank_name: String,
    pub license_number: String,
    pub head_office_address: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub password_hash: String,
}

/// Registration form fields for the bank portal
#[derive(Debug, Clone, Default)]
pub struct BankRegistration {
    pub bank_name: String,
    pub license_number: String,
    pub head_office_address: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub password: String,
}

/// Auth API response: the token plus an opaque user blob that is stored
/// as-is and never parsed by the session layer
#[derive(Debug, Deserialize)]
struct AuthResponse {
    token: String,
    #[serde(default)]
    user: Option<serde_json::Value>,
}

/// Login with email and password (customer portal)
#[cfg(not(feature = "ssr"))]
pub async fn login(email: &str, password: &str) -> Result<Session, String> {
    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    authenticate(crate::core::endpoints::LOGIN, &request).await
}

#[cfg(feature = "ssr")]
pub async fn login(_email: &str, _password: &str) -> Result<Session, String> {
    Err("Login not available on server".to_string())
}

/// Login against the bank portal endpoint
#[cfg(not(feature = "ssr"))]
pub async fn bank_login(email: &str, password: &str) -> Result<Session, String> {
    let request = BankLoginRequest {
        contact_email: email.to_string(),
        password_hash: password.to_string(),
    };
    authenticate(crate::core::endpoints::BANK_LOGIN, &request).await
}

#[cfg(feature = "ssr")]
pub async fn bank_login(_email: &str, _password: &str) -> Result<Session, String> {
    Err("Login not available on server".to_string())
}

#[cfg(not(feature = "ssr"))]
async fn authenticate<B: Serialize>(endpoint: &str, request: &B) -> Result<Session, String> {
    use crate::core::session::{BrowserStore, SessionStore, decode_token};

    let ctx = use_auth_context();
    ctx.loading.set(true);
    ctx.error.set(None);

    let result = async {
        let response: AuthResponse = crate::core::api::post_json(endpoint, request)
            .await
            .map_err(|e| e.to_string())?;

        BrowserStore.write(&response.token);
        if let Some(user) = &response.user {
            save_user_blob(user);
        }

        let claims = decode_token(&response.token).unwrap_or_default();
        Ok(Session {
            subject_id: claims.subject_id().map(str::to_string),
            role: claims.role(),
            token: response.token,
        })
    }
    .await;

    ctx.loading.set(false);

    match &result {
        Ok(session) => ctx.state.set(AuthState::Authenticated(session.clone())),
        Err(e) => ctx.error.set(Some(e.clone())),
    }

    result
}

/// Register a new customer account; the user signs in afterwards
#[cfg(not(feature = "ssr"))]
pub async fn register(name: &str, email: &str, password: &str) -> Result<(), String> {
    let ctx = use_auth_context();
    ctx.loading.set(true);
    ctx.error.set(None);

    let request = RegisterRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };

    let result: Result<serde_json::Value, _> =
        crate::core::api::post_json(crate::core::endpoints::REGISTER, &request).await;

    ctx.loading.set(false);

    match result {
        Ok(_) => Ok(()),
        Err(e) => {
            ctx.error.set(Some(e.to_string()));
            Err(e.to_string())
        }
    }
}

#[cfg(feature = "ssr")]
pub async fn register(_name: &str, _email: &str, _password: &str) -> Result<(), String> {
    Err("Registration not available on server".to_string())
}

/// Register a new bank account
#[cfg(not(feature = "ssr"))]
pub async fn bank_register(form: &BankRegistration) -> Result<(), String> {
    let ctx = use_auth_context();
    ctx.loading.set(true);
    ctx.error.set(None);

    let request = BankRegisterRequest {
        bank_name: form.bank_name.clone(),
        license_number: form.license_number.clone(),
        head_office_address: form.head_office_address.clone(),
        contact_email: form.contact_email.clone(),
        contact_phone: form.contact_phone.clone(),
        password_hash: form.password.clone(),
    };

    let result: Result<serde_json::Value, _> =
        crate::core::api::post_json(crate::core::endpoints::BANK_REGISTER, &request).await;

    ctx.loading.set(false);

    match result {
        Ok(_) => Ok(()),
        Err(e) => {
            ctx.error.set(Some(e.to_string()));
            Err(e.to_string())
        }
    }
}

#[cfg(feature = "ssr")]
pub async fn bank_register(_form: &BankRegistration) -> Result<(), String> {
    Err("Registration not available on server".to_string())
}

/// Log out: drop both storage keys and reset auth state
#[cfg(not(feature = "ssr"))]
pub fn logout() {
    use crate::core::session::{BrowserStore, SessionStore};

    BrowserStore.clear();
    clear_user_blob();

    let ctx = use_auth_context();
    ctx.state.set(AuthState::Unauthenticated);
    ctx.error.set(None);
}

#[cfg(feature = "ssr")]
pub fn logout() {}

/// Persist the opaque user blob written by login responses
#[cfg(not(feature = "ssr"))]
fn save_user_blob(user: &serde_json::Value) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(json) = serde_json::to_string(user) {
                let _ = storage.set_item(crate::core::session::USER_STORAGE_KEY, &json);
            }
        }
    }
}

#[cfg(not(feature = "ssr"))]
fn clear_user_blob() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(crate::core::session::USER_STORAGE_KEY);
        }
    }
}
