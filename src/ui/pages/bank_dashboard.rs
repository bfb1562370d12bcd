//! Bank officer dashboard: portfolio metrics and a shortcut to the
//! pending-application queue

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::core::api::{ApiError, get_json};
use crate::core::endpoints;
use crate::core::session::Role;
use crate::core::types::{BankMetrics, format_currency};
use crate::ui::common::{Button, PortalLayout, StatCard};

#[component]
pub fn BankDashboardPage() -> impl IntoView {
    let navigate = use_navigate();

    let metrics = RwSignal::new(BankMetrics::default());
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            match fetch_metrics().await {
                Ok(m) => metrics.set(m),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    });

    view! {
        <PortalLayout role=Role::Bank active="dashboard" title="Loan Officer Dashboard">
            {move || {
                error.get().map(|e| view! {
                    <div class="mb-4 p-3 bg-red-100 border border-red-300 rounded-lg">
                        <p class="text-sm text-red-700">{e}</p>
                    </div>
                })
            }}

            <div class="flex flex-wrap gap-4 mb-8">
                <StatCard
                    label="Total Loans"
                    value=Signal::derive(move || metrics.get().total_loans.to_string())
                />
                <StatCard
                    label="Pending Applications"
                    value=Signal::derive(move || metrics.get().pending_applications.to_string())
                />
                <StatCard
                    label="Approved Loans"
                    value=Signal::derive(move || metrics.get().approved_loans.to_string())
                />
                <StatCard
                    label="Total Disbursed"
                    value=Signal::derive(move || format_currency(metrics.get().total_disbursed))
                />
            </div>

            <Button on_click=Callback::new({
                let navigate = navigate.clone();
                move |_| navigate("/bank/applications", Default::default())
            })>
                "Review Pending Applications"
            </Button>
        </PortalLayout>
    }
}

async fn fetch_metrics() -> Result<BankMetrics, ApiError> {
    get_json(endpoints::BANK_METRICS).await
}
