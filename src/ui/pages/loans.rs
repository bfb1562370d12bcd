//! Customer loans list with search and status filtering

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::core::api::{ApiError, get_json};
use crate::core::endpoints;
use crate::core::session::Role;
use crate::core::types::{Loan, LoanListResponse, format_currency, format_date};
use crate::ui::common::{Button, CardSkeleton, PortalLayout, StatusBadge};

#[component]
pub fn LoansPage() -> impl IntoView {
    let navigate = use_navigate();

    let loans = RwSignal::new(Vec::<Loan>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let search_query = RwSignal::new(String::new());
    let status_filter = RwSignal::new("all".to_string());

    Effect::new(move |_| {
        spawn_local(async move {
            loading.set(true);
            error.set(None);
            match fetch_all_loans().await {
                Ok(l) => loans.set(l),
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    });

    let filtered_loans = Memo::new(move |_| {
        let query = search_query.get().to_lowercase();
        let status = status_filter.get();
        loans
            .get()
            .into_iter()
            .filter(|loan| status == "all" || loan.status.eq_ignore_ascii_case(&status))
            .filter(|loan| {
                if query.is_empty() {
                    return true;
                }
                loan.id.to_lowercase().contains(&query)
                    || loan.amount.to_string().contains(&query)
                    || loan
                        .loan_type_name
                        .as_ref()
                        .map(|n| n.to_lowercase().contains(&query))
                        .unwrap_or(false)
                    || loan
                        .due_date
                        .as_ref()
                        .map(|d| d.to_lowercase().contains(&query))
                        .unwrap_or(false)
            })
            .collect::<Vec<_>>()
    });

    view! {
        <PortalLayout role=Role::Customer active="loans" title="My Loans">
            {move || {
                error.get().map(|e| view! {
                    <div class="mb-4 p-3 bg-red-100 border border-red-300 rounded-lg">
                        <p class="text-sm text-red-700">{e}</p>
                    </div>
                })
            }}

            <div class="flex flex-wrap items-center gap-4 mb-6">
                <input
                    type="text"
                    placeholder="Search loans..."
                    class="flex-1 min-w-[240px] px-3 py-2 bg-white border border-[#dce1e5] rounded-lg
                           text-[#111518] placeholder-[#9aa8b5] focus:outline-none focus:ring-2
                           focus:ring-blue-500 focus:border-transparent"
                    prop:value=move || search_query.get()
                    on:input=move |ev| search_query.set(event_target_value(&ev))
                />
                <select
                    class="px-3 py-2 bg-white border border-[#dce1e5] rounded-lg text-[#111518]
                           focus:outline-none focus:ring-2 focus:ring-blue-500"
                    prop:value=move || status_filter.get()
                    on:change=move |ev| status_filter.set(event_target_value(&ev))
                >
                    <option value="all">"All Statuses"</option>
                    <option value="active">"Active"</option>
                    <option value="pending">"Pending"</option>
                    <option value="paid">"Paid"</option>
                    <option value="rejected">"Rejected"</option>
                </select>
                <Button on_click=Callback::new({
                    let navigate = navigate.clone();
                    move |_| navigate("/loan_request", Default::default())
                })>
                    "New Loan"
                </Button>
            </div>

            {move || {
                if loading.get() {
                    view! {
                        <div class="space-y-4">
                            <CardSkeleton/>
                            <CardSkeleton/>
                            <CardSkeleton/>
                        </div>
                    }
                    .into_any()
                } else if filtered_loans.get().is_empty() {
                    view! {
                        <p class="text-[#617589] text-sm py-8 text-center">"No loans found"</p>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="bg-white border border-[#dce1e5] rounded-xl overflow-hidden">
                            <table class="w-full text-left">
                                <thead>
                                    <tr class="border-b border-[#dce1e5]">
                                        <th class="px-6 py-3 text-sm font-medium text-[#111518]">"Loan ID"</th>
                                        <th class="px-6 py-3 text-sm font-medium text-[#111518]">"Type"</th>
                                        <th class="px-6 py-3 text-sm font-medium text-[#111518]">"Amount"</th>
                                        <th class="px-6 py-3 text-sm font-medium text-[#111518]">"Due Date"</th>
                                        <th class="px-6 py-3 text-sm font-medium text-[#111518]">"Status"</th>
                                        <th class="px-6 py-3"></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {filtered_loans
                                        .get()
                                        .into_iter()
                                        .map(|loan| {
                                            let loan_id = loan.id.clone();
                                            let short_id = loan.id.chars().take(8).collect::<String>();
                                            let navigate = use_navigate();
                                            view! {
                                                <tr class="border-t border-[#dce1e5] hover:bg-slate-50 transition-colors">
                                                    <td class="px-6 py-4 text-sm text-[#617589]">{short_id}</td>
                                                    <td class="px-6 py-4 text-sm text-[#111518]">
                                                        {loan.loan_type_name.clone().unwrap_or_else(|| "N/A".to_string())}
                                                    </td>
                                                    <td class="px-6 py-4 text-sm text-[#617589]">
                                                        {format_currency(loan.amount)}
                                                    </td>
                                                    <td class="px-6 py-4 text-sm text-[#617589]">
                                                        {format_date(loan.due_date.as_deref())}
                                                    </td>
                                                    <td class="px-6 py-4 text-sm">
                                                        <StatusBadge status=Signal::derive({
                                                            let status = loan.status.clone();
                                                            move || status.clone()
                                                        })/>
                                                    </td>
                                                    <td class="px-6 py-4 text-sm">
                                                        <button
                                                            class="text-blue-600 hover:underline font-medium"
                                                            on:click=move |_| {
                                                                navigate(
                                                                    &format!("/loan/{loan_id}"),
                                                                    Default::default(),
                                                                )
                                                            }
                                                        >
                                                            "View"
                                                        </button>
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

async fn fetch_all_loans() -> Result<Vec<Loan>, ApiError> {
    let response: LoanListResponse = get_json(endpoints::LOANS).await?;
    Ok(response.into_loans())
}
