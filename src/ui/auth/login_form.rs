//! Login form component
//!
//! Shared by the customer and bank login pages; the portal prop picks the
//! endpoint and the copy.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::{bank_login, login, use_auth_context};
use crate::core::session::Role;

/// Login form component
#[component]
pub fn LoginForm(
    /// Which portal this form signs into
    #[prop(default = Role::Customer)]
    portal: Role,
    /// Callback when login is successful
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
) -> impl IntoView {
    let auth = use_auth_context();

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    // Form validation
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);

    let validate_email = move || {
        let value = email.get();
        if value.is_empty() {
            email_error.set(Some("Email is required".to_string()));
            false
        } else if !value.contains('@') || !value.contains('.') {
            email_error.set(Some("Please enter a valid email".to_string()));
            false
        } else {
            email_error.set(None);
            true
        }
    };

    let validate_password = move || {
        let value = password.get();
        if value.is_empty() {
            password_error.set(Some("Password is required".to_string()));
            false
        } else {
            password_error.set(None);
            true
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        auth.clear_error();

        let email_valid = validate_email();
        let password_valid = validate_password();
        if !email_valid || !password_valid {
            return;
        }

        let email_val = email.get();
        let password_val = password.get();

        spawn_local(async move {
            let result = match portal {
                Role::Customer => login(&email_val, &password_val).await,
                Role::Bank => bank_login(&email_val, &password_val).await,
            };
            if result.is_ok() {
                if let Some(callback) = on_success {
                    callback.run(());
                }
            }
            // Errors are already set in the auth context
        });
    };

    let heading = match portal {
        Role::Customer => "Welcome Back",
        Role::Bank => "Bank Portal Sign In",
    };
    let subheading = match portal {
        Role::Customer => "Sign in to your account to continue",
        Role::Bank => "Sign in with your bank's contact email",
    };

    view! {
        <form on:submit=on_submit class="space-y-6">
            <div class="text-center">
                <h2 class="text-2xl font-bold text-[#111518]">{heading}</h2>
                <p class="mt-2 text-sm text-[#617589]">{subheading}</p>
            </div>

            // Global error message
            {move || {
                auth.error.get().map(|error| {
                    view! {
                        <div class="p-3 bg-red-100 border border-red-300 rounded-lg">
                            <p class="text-sm text-red-700">{error}</p>
                        </div>
                    }
                })
            }}

            // Email field
            <div>
                <label for="email" class="block text-sm font-medium text-[#111518] mb-1">
                    "Email"
                </label>
                <input
                    type="email"
                    id="email"
                    name="email"
                    autocomplete="email"
                    placeholder="you@example.com"
                    class="w-full px-3 py-2 bg-white border border-[#dce1e5] rounded-lg
                           text-[#111518] placeholder-[#9aa8b5]
                           focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent
                           transition-colors"
                    class:border-red-500=move || email_error.get().is_some()
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        email.set(event_target_value(&ev));
                        email_error.set(None);
                    }
                    on:blur=move |_| { validate_email(); }
                />
                {move || {
                    email_error.get().map(|error| {
                        view! { <p class="mt-1 text-sm text-red-500">{error}</p> }
                    })
                }}
            </div>

            // Password field
            <div>
                <label for="password" class="block text-sm font-medium text-[#111518] mb-1">
                    "Password"
                </label>
                <input
                    type="password"
                    id="password"
                    name="password"
                    autocomplete="current-password"
                    placeholder="Enter your password"
                    class="w-full px-3 py-2 bg-white border border-[#dce1e5] rounded-lg
                           text-[#111518] placeholder-[#9aa8b5]
                           focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent
                           transition-colors"
                    class:border-red-500=move || password_error.get().is_some()
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        password.set(event_target_value(&ev));
                        password_error.set(None);
                    }
                    on:blur=move |_| { validate_password(); }
                />
                {move || {
                    password_error.get().map(|error| {
                        view! { <p class="mt-1 text-sm text-red-500">{error}</p> }
                    })
                }}
            </div>

            <button
                type="submit"
                class="w-full py-2.5 bg-blue-600 hover:bg-blue-700 disabled:opacity-60
                       text-white text-sm font-bold rounded-lg transition-colors"
                disabled=move || auth.loading.get()
            >
                {move || if auth.loading.get() { "Signing in..." } else { "Sign In" }}
            </button>
        </form>
    }
}
