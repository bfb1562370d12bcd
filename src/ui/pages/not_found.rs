use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-[#f8fafc]">
            <h1 class="text-6xl font-bold text-[#111518]">"404"</h1>
            <p class="mt-4 text-[#617589]">"This page does not exist."</p>
            <A href="/login" attr:class="mt-6 text-sm font-medium text-blue-600 hover:underline">
                "Back to sign in"
            </A>
        </div>
    }
}
