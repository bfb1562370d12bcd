//! Bank registration page
//!
//! Registers an institution with its licensing details; officers then sign
//! in with the contact email.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::{BankRegistration, bank_register, use_auth_context};
use crate::ui::common::FormField;

#[component]
pub fn BankRegisterPage() -> impl IntoView {
    let auth = use_auth_context();

    let bank_name = RwSignal::new(String::new());
    let license_number = RwSignal::new(String::new());
    let head_office_address = RwSignal::new(String::new());
    let contact_email = RwSignal::new(String::new());
    let contact_phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let form_error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        auth.clear_error();

        // Every field is required by the backend
        let form = BankRegistration {
            bank_name: bank_name.get().trim().to_string(),
            license_number: license_number.get().trim().to_string(),
            head_office_address: head_office_address.get().trim().to_string(),
            contact_email: contact_email.get().trim().to_string(),
            contact_phone: contact_phone.get().trim().to_string(),
            password: password.get(),
        };

        if form.bank_name.is_empty()
            || form.license_number.is_empty()
            || form.head_office_address.is_empty()
            || form.contact_email.is_empty()
            || form.contact_phone.is_empty()
            || form.password.is_empty()
        {
            form_error.set(Some("Please fill in all fields".to_string()));
            return;
        }
        form_error.set(None);

        spawn_local(async move {
            if bank_register(&form).await.is_ok() {
                let navigate = use_navigate();
                navigate("/bank/login", Default::default());
            }
        });
    };

    view! {
        <div class="min-h-screen bg-slate-50 flex flex-col">
            <header class="border-b border-[#dce1e5] bg-white">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex items-center h-16">
                        <A href="/" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                            <span class="text-xl font-bold text-[#111518]">"LendWise"</span>
                        </A>
                    </div>
                </div>
            </header>

            <main class="flex-1 flex items-center justify-center p-4">
                <div class="w-full max-w-lg bg-white border border-[#dce1e5] rounded-xl p-8">
                    <form on:submit=on_submit class="space-y-5">
                        <div class="text-center">
                            <h2 class="text-2xl font-bold text-[#111518]">"Register Your Bank"</h2>
                            <p class="mt-2 text-sm text-[#617589]">
                                "Join LendWise to review and fund loan applications"
                            </p>
                        </div>

                        {move || {
                            form_error.get().or_else(|| auth.error.get()).map(|error| {
                                view! {
                                    <div class="p-3 bg-red-100 border border-red-300 rounded-lg">
                                        <p class="text-sm text-red-700">{error}</p>
                                    </div>
                                }
                            })
                        }}

                        <FormField
                            label="Bank Name".to_string()
                            required=true
                            value=Signal::derive(move || bank_name.get())
                            on_input=Callback::new(move |v| bank_name.set(v))
                        />
                        <FormField
                            label="License Number".to_string()
                            required=true
                            value=Signal::derive(move || license_number.get())
                            on_input=Callback::new(move |v| license_number.set(v))
                        />
                        <FormField
                            label="Head Office Address".to_string()
                            required=true
                            value=Signal::derive(move || head_office_address.get())
                            on_input=Callback::new(move |v| head_office_address.set(v))
                        />
                        <FormField
                            label="Contact Email".to_string()
                            required=true
                            input_type="email"
                            value=Signal::derive(move || contact_email.get())
                            on_input=Callback::new(move |v| contact_email.set(v))
                        />
                        <FormField
                            label="Contact Phone".to_string()
                            required=true
                            value=Signal::derive(move || contact_phone.get())
                            on_input=Callback::new(move |v| contact_phone.set(v))
                        />
                        <FormField
                            label="Password".to_string()
                            required=true
                            input_type="password"
                            value=Signal::derive(move || password.get())
                            on_input=Callback::new(move |v| password.set(v))
                        />

                        <button
                            type="submit"
                            class="w-full py-2.5 bg-blue-600 hover:bg-blue-700 disabled:opacity-60
                                   text-white text-sm font-bold rounded-lg transition-colors"
                            disabled=move || auth.loading.get()
                        >
                            {move || if auth.loading.get() { "Registering..." } else { "Register" }}
                        </button>
                    </form>

                    <p class="mt-6 text-center text-sm text-[#617589]">
                        "Already registered? "
                        <A href="/bank/login" attr:class="text-blue-600 hover:underline font-medium">
                            "Sign in"
                        </A>
                    </p>
                </div>
            </main>
        </div>
    }
}
