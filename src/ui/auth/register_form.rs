//! Customer registration form

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::{register, use_auth_context};
use crate::ui::common::FormField;

#[component]
pub fn RegisterForm(
    /// Callback when registration is successful
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
) -> impl IntoView {
    let auth = use_auth_context();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());

    let name_error = RwSignal::new(None::<String>);
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let confirm_error = RwSignal::new(None::<String>);

    let validate = move || {
        let mut ok = true;

        if name.get().trim().is_empty() {
            name_error.set(Some("Name is required".to_string()));
            ok = false;
        } else {
            name_error.set(None);
        }

        let email_val = email.get();
        if email_val.is_empty() {
            email_error.set(Some("Email is required".to_string()));
            ok = false;
        } else if !email_val.contains('@') || !email_val.contains('.') {
            email_error.set(Some("Please enter a valid email".to_string()));
            ok = false;
        } else {
            email_error.set(None);
        }

        let password_val = password.get();
        if password_val.is_empty() {
            password_error.set(Some("Password is required".to_string()));
            ok = false;
        } else if password_val.len() < 8 {
            password_error.set(Some("Password must be at least 8 characters".to_string()));
            ok = false;
        } else {
            password_error.set(None);
        }

        if confirm_password.get() != password_val {
            confirm_error.set(Some("Passwords do not match".to_string()));
            ok = false;
        } else {
            confirm_error.set(None);
        }

        ok
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        auth.clear_error();

        if !validate() {
            return;
        }

        let name_val = name.get();
        let email_val = email.get();
        let password_val = password.get();

        spawn_local(async move {
            if register(&name_val, &email_val, &password_val).await.is_ok() {
                if let Some(callback) = on_success {
                    callback.run(());
                }
            }
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-5">
            <div class="text-center">
                <h2 class="text-2xl font-bold text-[#111518]">"Create Your Account"</h2>
                <p class="mt-2 text-sm text-[#617589]">"Apply for loans in minutes once you're in"</p>
            </div>

            {move || {
                auth.error.get().map(|error| {
                    view! {
                        <div class="p-3 bg-red-100 border border-red-300 rounded-lg">
                            <p class="text-sm text-red-700">{error}</p>
                        </div>
                    }
                })
            }}

            <FormField
                label="Full Name".to_string()
                required=true
                placeholder="Jane Doe".to_string()
                value=Signal::derive(move || name.get())
                on_input=Callback::new(move |v| { name.set(v); name_error.set(None); })
                error=Signal::derive(move || name_error.get())
            />
            <FormField
                label="Email".to_string()
                required=true
                input_type="email"
                placeholder="you@example.com".to_string()
                value=Signal::derive(move || email.get())
                on_input=Callback::new(move |v| { email.set(v); email_error.set(None); })
                error=Signal::derive(move || email_error.get())
            />
            <FormField
                label="Password".to_string()
                required=true
                input_type="password"
                value=Signal::derive(move || password.get())
                on_input=Callback::new(move |v| { password.set(v); password_error.set(None); })
                error=Signal::derive(move || password_error.get())
            />
            <FormField
                label="Confirm Password".to_string()
                required=true
                input_type="password"
                value=Signal::derive(move || confirm_password.get())
                on_input=Callback::new(move |v| { confirm_password.set(v); confirm_error.set(None); })
                error=Signal::derive(move || confirm_error.get())
            />

            <button
                type="submit"
                class="w-full py-2.5 bg-blue-600 hover:bg-blue-700 disabled:opacity-60
                       text-white text-sm font-bold rounded-lg transition-colors"
                disabled=move || auth.loading.get()
            >
                {move || if auth.loading.get() { "Creating account..." } else { "Sign Up" }}
            </button>
        </form>
    }
}
