use leptos::prelude::*;

/// Centered loading spinner
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="w-8 h-8 border-4 border-[#dce1e5] border-t-blue-600 rounded-full animate-spin"></div>
        </div>
    }
}

/// Pulsing placeholder shown while a loan card loads
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="bg-white border border-[#dce1e5] rounded-xl p-6 animate-pulse">
            <div class="h-4 bg-[#f0f2f4] rounded w-1/3 mb-4"></div>
            <div class="h-8 bg-[#f0f2f4] rounded w-1/2 mb-2"></div>
            <div class="h-4 bg-[#f0f2f4] rounded w-2/3"></div>
        </div>
    }
}
