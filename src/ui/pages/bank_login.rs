//! Bank-officer login page

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::session::Role;
use crate::ui::auth::LoginForm;

#[component]
pub fn BankLoginPage() -> impl IntoView {
    let on_success = move |_| {
        let navigate = use_navigate();
        navigate("/bank/dashboard", Default::default());
    };

    view! {
        <div class="min-h-screen bg-slate-50 flex flex-col">
            <header class="border-b border-[#dce1e5] bg-white">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex items-center justify-between h-16">
                        <A href="/" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                            <span class="text-xl font-bold text-[#111518]">"LendWise"</span>
                        </A>
                        <A href="/login" attr:class="text-sm text-[#617589] hover:text-[#111518] transition-colors">
                            "Customer portal"
                        </A>
                    </div>
                </div>
            </header>

            <main class="flex-1 flex items-center justify-center p-4">
                <div class="w-full max-w-md bg-white border border-[#dce1e5] rounded-xl p-8">
                    <LoginForm portal=Role::Bank on_success=Callback::new(on_success)/>
                    <p class="mt-6 text-center text-sm text-[#617589]">
                        "New bank? "
                        <A href="/bank/register" attr:class="text-blue-600 hover:underline font-medium">
                            "Register your institution"
                        </A>
                    </p>
                </div>
            </main>
        </div>
    }
}
