//! LendWise - Loan Management Portal
//!
//! Customer and bank-officer web portals for a loan-management product,
//! built with Leptos and WebAssembly. All business rules live in the REST
//! backend; this crate is the client.

#![recursion_limit = "256"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
