//! Authentication UI module
//!
//! Auth context, login/register forms, and the route guard wrapper for
//! protected pages.

mod context;
mod login_form;
mod protected;
mod register_form;

pub use context::{
    AuthContext, AuthState, BankRegistration, Session, bank_register, logout,
    provide_auth_context, use_auth_context,
};
pub use login_form::LoginForm;
pub use protected::ProtectedRoute;
pub use register_form::RegisterForm;
