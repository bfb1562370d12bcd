use leptos::prelude::*;

/// Badge classes for a loan or payment status, matching the table palette
fn status_classes(status: &str) -> &'static str {
    match status.to_lowercase().as_str() {
        "active" | "approved" | "completed" | "success" => "bg-green-100 text-green-800",
        "paid" => "bg-gray-200 text-gray-800",
        "pending" => "bg-yellow-100 text-yellow-800",
        "rejected" | "overdue" | "failed" => "bg-red-100 text-red-800",
        _ => "bg-blue-100 text-blue-800",
    }
}

/// Pill-shaped status label used in the loan and payment tables
#[component]
pub fn StatusBadge(#[prop(into)] status: Signal<String>) -> impl IntoView {
    view! {
        <span class=move || {
            format!(
                "rounded-full px-2.5 py-0.5 text-xs font-medium capitalize {}",
                status_classes(&status.get())
            )
        }>
            {move || status.get()}
        </span>
    }
}
