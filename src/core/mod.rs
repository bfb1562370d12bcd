//! Core client logic: session validation, API client, wire types

pub mod api;
pub mod endpoints;
pub mod session;
pub mod types;

#[cfg(test)]
mod tests;

pub use api::ApiError;
pub use session::{
    Role, SessionGuard, SessionStore, SessionVerdict, TokenClaims, decode_token, evaluate_token,
    subject_id_from_token,
};
