use leptos::prelude::*;

/// White panel with the product's standard border
#[component]
pub fn Card(
    /// Optional heading above the content
    #[prop(optional, into)]
    title: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="bg-white border border-[#dce1e5] rounded-xl p-6">
            {title.map(|t| view! {
                <h3 class="text-[#111518] text-lg font-bold leading-tight mb-4">{t}</h3>
            })}
            {children()}
        </div>
    }
}

/// Labelled figure used on the dashboards
#[component]
pub fn StatCard(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="flex min-w-[158px] flex-1 flex-col gap-2 rounded-xl p-6 bg-[#f0f2f4]">
            <p class="text-[#111518] text-base font-medium leading-normal">{label}</p>
            <p class="text-[#111518] text-2xl font-bold leading-tight">{move || value.get()}</p>
        </div>
    }
}
