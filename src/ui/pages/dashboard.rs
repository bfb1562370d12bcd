//! Customer dashboard
//!
//! Loan summary figures plus the most recent loan activity.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::core::api::{ApiError, get_json};
use crate::core::endpoints;
use crate::core::session::Role;
use crate::core::types::{Loan, LoanListResponse, LoanSummary, format_currency, format_date};
use crate::ui::common::{Button, PortalLayout, Spinner, StatCard, StatusBadge};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let navigate = use_navigate();

    let summary = RwSignal::new(LoanSummary::default());
    let loans = RwSignal::new(Vec::<Loan>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            loading.set(true);
            error.set(None);

            match fetch_summary().await {
                Ok(s) => summary.set(s),
                Err(e) => error.set(Some(e.to_string())),
            }
            match fetch_loans().await {
                Ok(l) => loans.set(l),
                Err(e) => error.set(Some(e.to_string())),
            }

            loading.set(false);
        });
    });

    // Most recent first; the backend list is not ordered
    let recent_loans = Memo::new(move |_| {
        let mut result = loans.get();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        result.truncate(5);
        result
    });

    view! {
        <PortalLayout role=Role::Customer active="dashboard" title="Dashboard">
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
                    value=Signal::derive(move || summary.get().total_loans.to_string())
                />
                <StatCard
                    label="Active Loans"
                    value=Signal::derive(move || summary.get().active_loans.to_string())
                />
                <StatCard
                    label="Total Borrowed"
                    value=Signal::derive(move || format_currency(summary.get().total_borrowed))
                />
                <StatCard
                    label="Outstanding"
                    value=Signal::derive(move || format_currency(summary.get().total_outstanding))
                />
            </div>

            <div class="flex items-center justify-between mb-4">
                <h2 class="text-[#111518] text-[22px] font-bold leading-tight">
                    "Recent Activity"
                </h2>
                <Button on_click=Callback::new({
                    let navigate = navigate.clone();
                    move |_| navigate("/loan_request", Default::default())
                })>
                    "Apply for a Loan"
                </Button>
            </div>

            {move || {
                if loading.get() {
                    view! { <Spinner/> }.into_any()
                } else if recent_loans.get().is_empty() {
                    view! {
                        <p class="text-[#617589] text-sm py-8 text-center">
                            "No loan activity yet. Apply for your first loan to get started."
                        </p>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="bg-white border border-[#dce1e5] rounded-xl overflow-hidden">
                            <table class="w-full text-left">
                                <thead>
                                    <tr class="border-b border-[#dce1e5]">
                                        <th class="px-6 py-3 text-sm font-medium text-[#111518]">"Loan"</th>
                                        <th class="px-6 py-3 text-sm font-medium text-[#111518]">"Amount"</th>
                                        <th class="px-6 py-3 text-sm font-medium text-[#111518]">"Date"</th>
                                        <th class="px-6 py-3 text-sm font-medium text-[#111518]">"Status"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {recent_loans
                                        .get()
                                        .into_iter()
                                        .map(|loan| {
                                            view! {
                                                <tr class="border-t border-[#dce1e5]">
                                                    <td class="px-6 py-4 text-sm text-[#111518]">
                                                        {loan.loan_type_name.clone().unwrap_or_else(|| "Loan".to_string())}
                                                    </td>
                                                    <td class="px-6 py-4 text-sm text-[#617589]">
                                                        {format_currency(loan.amount)}
                                                    </td>
                                                    <td class="px-6 py-4 text-sm text-[#617589]">
                                                        {format_date(loan.created_at.as_deref())}
                                                    </td>
                                                    <td class="px-6 py-4 text-sm">
                                                        <StatusBadge status=Signal::derive({
                                                            let status = loan.status.clone();
                                                            move || status.clone()
                                                        })/>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }
                    .into_any()
                }
            }}
        </PortalLayout>
    }
}

async fn fetch_summary() -> Result<LoanSummary, ApiError> {
    get_json(endpoints::LOAN_SUMMARY).await
}

async fn fetch_loans() -> Result<Vec<Loan>, ApiError> {
    let response: LoanListResponse = get_json(endpoints::LOANS).await?;
    Ok(response.into_loans())
}
