//! Customer registration page

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::RegisterForm;

#[component]
pub fn RegisterPage() -> impl IntoView {
    // Account created; the user signs in with their new credentials
    let on_success = move |_| {
        let navigate = use_navigate();
        navigate("/login", Default::default());
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
                <div class="w-full max-w-md bg-white border border-[#dce1e5] rounded-xl p-8">
                    <RegisterForm on_success=Callback::new(on_success)/>
                    <p class="mt-6 text-center text-sm text-[#617589]">
                        "Already have an account? "
                        <A href="/login" attr:class="text-blue-600 hover:underline font-medium">
                            "Sign in"
                        </A>
                    </p>
                </div>
            </main>
        </div>
    }
}
