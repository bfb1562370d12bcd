//! Loan detail page with repayment history

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::core::api::{ApiError, get_json};
use crate::core::endpoints;
use crate::core::session::{Role, stored_token, subject_id_from_token};
use crate::core::types::{
    Loan, LoanDetailResponse, RepaymentRecord, RepaymentHistoryResponse, format_currency,
    format_date,
};
use crate::ui::common::{Button, Card, PortalLayout, Spinner, StatusBadge};

#[component]
pub fn LoanDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let loan_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    let loan = RwSignal::new(None::<Loan>);
    let history = RwSignal::new(Vec::<RepaymentRecord>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let id = loan_id.get();
        if id.is_empty() {
            return;
        }
        spawn_local(async move {
            loading.set(true);
            error.set(None);

            match fetch_loan(&id).await {
                Ok(l) => loan.set(Some(l)),
                Err(e) => error.set(Some(e.to_string())),
            }
            match fetch_history(&id).await {
                Ok(h) => history.set(h),
                Err(e) => error.set(Some(e.to_string())),
            }

            loading.set(false);
        });
    });

    view! {
        <PortalLayout role=Role::Customer active="loans" title="Loan Details">
            {move || {
                error.get().map(|e| view! {
                    <div class="mb-4 p-3 bg-red-100 border border-red-300 rounded-lg">
                        <p class="text-sm text-red-700">{e}</p>
                    </div>
                })
            }}

            {move || {
                if loading.get() {
                    return view! { <Spinner/> }.into_any();
                }
                let Some(loan) = loan.get() else {
                    return view! {
                        <p class="text-[#617589] text-sm py-8 text-center">"Loan not found"</p>
                    }
                    .into_any();
                };

                let outstanding = loan.outstanding_balance.unwrap_or(0.0);
                let repay_id = loan.id.clone();

                view! {
                    <div class="space-y-6 max-w-4xl">
                        <Card title="Overview">
                            <dl class="grid grid-cols-2 gap-x-8 gap-y-4">
                                <DetailRow label="Loan ID" value={loan.id.chars().take(16).collect::<String>()}/>
                                <DetailRow
                                    label="Loan Type"
                                    value=loan.loan_type_name.clone().unwrap_or_else(|| "N/A".to_string())
                                />
                                <DetailRow label="Principal" value=format_currency(loan.amount)/>
                                <DetailRow
                                    label="Interest Rate"
                                    value=loan
                                        .interest_rate
                                        .map(|r| format!("{r}%"))
                                        .unwrap_or_else(|| "N/A".to_string())
                                />
                                <DetailRow
                                    label="Term"
                                    value=loan
                                        .tenure_month
                                        .map(|t| format!("{t} months"))
                                        .unwrap_or_else(|| "N/A".to_string())
                                />
                                <DetailRow label="Applied" value=format_date(loan.created_at.as_deref())/>
                                <DetailRow label="Due Date" value=format_date(loan.due_date.as_deref())/>
                                <div>
                                    <dt class="text-sm text-[#617589]">"Status"</dt>
                                    <dd class="mt-1">
                                        <StatusBadge status=Signal::derive({
                                            let status = loan.status.clone();
                                            move || status.clone()
                                        })/>
                                    </dd>
                                </div>
                            </dl>
                        </Card>

                        <Card title="Balance">
                            <div class="flex items-center justify-between">
                                <div>
                                    <p class="text-sm text-[#617589]">"Outstanding Balance"</p>
                                    <p class="text-2xl font-bold text-red-600">
                                        {format_currency(outstanding)}
                                    </p>
                                </div>
                                {(outstanding > 0.0).then(|| view! {
                                    <Button on_click=Callback::new({
                                        let repay_id = repay_id.clone();
                                        move |_| {
                                            let navigate = use_navigate();
                                            navigate(&format!("/repay/{repay_id}"), Default::default());
                                        }
                                    })>
                                        "Make a Payment"
                                    </Button>
                                })}
                            </div>
                        </Card>

                        <Card title="Repayment History">
                            {if history.get().is_empty() {
                                view! {
                                    <p class="text-[#617589] text-sm">"No payments recorded yet"</p>
                                }
                                .into_any()
                            } else {
                                view! {
                                    <table class="w-full text-left">
                                        <thead>
                                            <tr class="border-b border-[#dce1e5]">
                                                <th class="py-2 text-sm font-medium text-[#111518]">"Date"</th>
                                                <th class="py-2 text-sm font-medium text-[#111518]">"Method"</th>
                                                <th class="py-2 text-sm font-medium text-[#111518]">"Amount"</th>
                                                <th class="py-2 text-sm font-medium text-[#111518]">"Status"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {history
                                                .get()
                                                .into_iter()
                                                .map(|record| {
                                                    let date = record
                                                        .payment_date
                                                        .as_deref()
                                                        .or(record.created_at.as_deref())
                                                        .map(|d| format_date(Some(d)))
                                                        .unwrap_or_else(|| "N/A".to_string());
                                                    view! {
                                                        <tr class="border-t border-[#dce1e5]">
                                                            <td class="py-3 text-sm text-[#617589]">{date}</td>
                                                            <td class="py-3 text-sm text-[#617589]">
                                                                {record.method.clone().unwrap_or_else(|| "Wallet".to_string())}
                                                            </td>
                                                            <td class="py-3 text-sm text-[#111518]">
                                                                {format_currency(record.amount_paid)}
                                                            </td>
                                                            <td class="py-3 text-sm">
                                                                <StatusBadge status=Signal::derive({
                                                                    let status = record
                                                                        .status
                                                                        .clone()
                                                                        .unwrap_or_else(|| "Pending".to_string());
                                                                    move || status.clone()
                                                                })/>
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect_view()}
                                        </tbody>
                                    </table>
                                }
                                .into_any()
                            }}
                        </Card>
                    </div>
                }
                .into_any()
            }}
        </PortalLayout>
    }
}

#[component]
fn DetailRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div>
            <dt class="text-sm text-[#617589]">{label}</dt>
            <dd class="mt-1 text-sm text-[#111518]">{value}</dd>
        </div>
    }
}

/// Loan detail is customer-scoped when the token carries a subject id
async fn fetch_loan(loan_id: &str) -> Result<Loan, ApiError> {
    let customer_id = stored_token().as_deref().and_then(subject_id_from_token);
    let url = endpoints::loan_by_id(loan_id, customer_id.as_deref());
    let response: LoanDetailResponse = get_json(&url).await?;
    Ok(response.into_loan())
}

async fn fetch_history(loan_id: &str) -> Result<Vec<RepaymentRecord>, ApiError> {
    let response: RepaymentHistoryResponse =
        get_json(&endpoints::repayment_history(loan_id)).await?;
    Ok(response.repayment_history)
}
