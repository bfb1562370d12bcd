//! Customer login page
//!
//! Redirects to the dashboard on success or when a session already exists.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::session::Role;
use crate::ui::auth::{AuthState, LoginForm, use_auth_context};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth_context();

    // Redirect if already authenticated
    Effect::new(move |_| {
        if let AuthState::Authenticated(session) = auth.state.get() {
            let navigate = use_navigate();
            match session.role {
                Role::Bank => navigate("/bank/dashboard", Default::default()),
                Role::Customer => navigate("/dashboard", Default::default()),
            }
        }
    });

    let on_success = move |_| {
        let navigate = use_navigate();
        navigate("/dashboard", Default::default());
    };

    view! {
        <div class="min-h-screen bg-slate-50 flex flex-col">
            <header class="border-b border-[#dce1e5] bg-white">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex items-center justify-between h-16">
                        <A href="/" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                            <span class="text-xl font-bold text-[#111518]">"LendWise"</span>
                        </A>
                        <A href="/bank/login" attr:class="text-sm text-[#617589] hover:text-[#111518] transition-colors">
                            "Bank portal"
                        </A>
                    </div>
                </div>
            </header>

            <main class="flex-1 flex items-center justify-center p-4">
                <div class="w-full max-w-md bg-white border border-[#dce1e5] rounded-xl p-8">
                    <LoginForm on_success=Callback::new(on_success)/>
                    <p class="mt-6 text-center text-sm text-[#617589]">
                        "Don't have an account? "
                        <A href="/register" attr:class="text-blue-600 hover:underline font-medium">
                            "Sign up"
                        </A>
                    </p>
                </div>
            </main>

            <footer class="py-4 border-t border-[#dce1e5]">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <p class="text-center text-sm text-[#9aa8b5]">
                        "© 2025 LendWise. All rights reserved."
                    </p>
                </div>
            </footer>
        </div>
    }
}
