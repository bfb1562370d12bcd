//! Bank applications queue: loan applications awaiting review

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::core::api::{ApiError, get_json};
use crate::core::endpoints;
use crate::core::session::Role;
use crate::core::types::{Loan, LoanListResponse, format_currency, format_date};
use crate::ui::common::{PortalLayout, Spinner};

#[component]
pub fn BankApplicationsPage() -> impl IntoView {
    let pending = RwSignal::new(Vec::<Loan>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            loading.set(true);
            match fetch_pending_loans().await {
                Ok(loans) => pending.set(loans),
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    });

    view! {
        <PortalLayout role=Role::Bank active="applications" title="Loan Applications">
            {move || {
                error.get().map(|e| view! {
                    <div class="mb-4 p-3 bg-red-100 border border-red-300 rounded-lg">
                        <p class="text-sm text-red-700">{e}</p>
                    </div>
                })
            }}

            {move || {
                if loading.get() {
                    view! { <Spinner/> }.into_any()
                } else if pending.get().is_empty() {
                    view! {
                        <p class="text-[#617589] text-sm py-8 text-center">
                            "No pending loan applications found"
                        </p>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="bg-white border border-[#dce1e5] rounded-xl overflow-hidden">
                            <table class="w-full text-left">
                                <thead>
                                    <tr class="border-b border-[#dce1e5]">
                                        <th class="px-6 py-3 text-sm font-medium text-[#111518]">"Applicant"</th>
                                        <th class="px-6 py-3 text-sm font-medium text-[#111518]">"Amount"</th>
                                        <th class="px-6 py-3 text-sm font-medium text-[#111518]">"Loan Type"</th>
                                        <th class="px-6 py-3 text-sm font-medium text-[#111518]">"Applied"</th>
                                        <th class="px-6 py-3"></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {pending
                                        .get()
                                        .into_iter()
                                        .map(|loan| {
                                            let loan_id = loan.id.clone();
                                            let navigate = use_navigate();
                                            view! {
                                                <tr class="border-t border-[#dce1e5] hover:bg-slate-50 transition-colors">
                                                    <td class="px-6 py-4 text-sm text-[#111518]">
                                                        {loan.applicant_name()}
                                                    </td>
                                                    <td class="px-6 py-4 text-sm text-[#617589]">
                                                        {format_currency(loan.amount)}
                                                    </td>
                                                    <td class="px-6 py-4 text-sm text-[#617589]">
                                                        {loan.loan_type_name.clone().unwrap_or_else(|| "N/A".to_string())}
                                                    </td>
                                                    <td class="px-6 py-4 text-sm text-[#617589]">
                                                        {format_date(loan.created_at.as_deref())}
                                                    </td>
                                                    <td class="px-6 py-4 text-sm">
                                                        <button
                                                            class="text-blue-600 hover:underline font-medium"
                                                            on:click=move |_| {
                                                                navigate(
                                                                    &format!("/bank/applications/{loan_id}"),
                                                                    Default::default(),
                                                                )
                                                            }
                                                        >
                                                            "Review"
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

async fn fetch_pending_loans() -> Result<Vec<Loan>, ApiError> {
    let response: LoanListResponse = get_json(endpoints::PENDING_LOANS).await?;
    Ok(response.into_loans())
}
