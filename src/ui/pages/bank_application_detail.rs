//! Bank-side loan application review
//!
//! Loan terms plus the applicant's profile, with approve and reject
//! actions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::core::api::{ApiError, get_json, put_json};
use crate::core::endpoints;
use crate::core::session::Role;
use crate::core::types::{
    CustomerProfile, Loan, LoanDetailResponse, ProfileResponse, format_currency, format_date,
};
use crate::ui::common::{Button, ButtonVariant, Card, PortalLayout, Spinner, StatusBadge};

#[component]
pub fn BankApplicationDetailPage() -> impl IntoView {
    let params = use_params_map();
    let loan_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    let loan = RwSignal::new(None::<Loan>);
    let applicant = RwSignal::new(None::<CustomerProfile>);
    let loading = RwSignal::new(true);
    let acting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let id = loan_id.get();
        if id.is_empty() {
            return;
        }
        spawn_local(async move {
            loading.set(true);
            error.set(None);

            match fetch_application(&id).await {
                Ok(l) => {
                    // The applicant's profile hangs off the loan's customer id
                    if let Some(customer_id) = l.customer_id.clone() {
                        match fetch_applicant(&customer_id).await {
                            Ok(p) => applicant.set(Some(p)),
                            Err(e) => error.set(Some(e.to_string())),
                        }
                    }
                    loan.set(Some(l));
                }
                Err(e) => error.set(Some(e.to_string())),
            }

            loading.set(false);
        });
    });

    let decide = move |approve: bool| {
        let id = loan_id.get();
        let navigate = use_navigate();
        spawn_local(async move {
            acting.set(true);
            error.set(None);
            match submit_decision(&id, approve).await {
                Ok(()) => navigate("/bank/applications", Default::default()),
                Err(e) => error.set(Some(e.to_string())),
            }
            acting.set(false);
        });
    };

    view! {
        <PortalLayout role=Role::Bank active="applications" title="Application Review">
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
                        <p class="text-[#617589] text-sm py-8 text-center">"Application not found"</p>
                    }
                    .into_any();
                };

                view! {
                    <div class="space-y-6 max-w-4xl">
                        <Card title="Loan Terms">
                            <dl class="grid grid-cols-2 gap-x-8 gap-y-4">
                                <ReviewRow
                                    label="Application ID"
                                    value={loan.id.chars().take(16).collect::<String>()}
                                />
                                <ReviewRow
                                    label="Loan Type"
                                    value=loan.loan_type_name.clone().unwrap_or_else(|| "N/A".to_string())
                                />
                                <ReviewRow label="Amount" value=format_currency(loan.amount)/>
                                <ReviewRow
                                    label="Term"
                                    value=loan
                                        .tenure_month
                                        .map(|t| format!("{t} months"))
                                        .unwrap_or_else(|| "N/A".to_string())
                                />
                                <ReviewRow
                                    label="Applied"
                                    value=format_date(loan.created_at.as_deref())
                                />
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

                        {move || {
                            applicant.get().map(|profile| view! {
                                <Card title="Applicant">
                                    <dl class="grid grid-cols-2 gap-x-8 gap-y-4">
                                        <ReviewRow label="Name" value=profile.full_name()/>
                                        <ReviewRow
                                            label="Email"
                                            value=profile.email.clone().unwrap_or_else(|| "N/A".to_string())
                                        />
                                        <ReviewRow
                                            label="Occupation"
                                            value=profile.occupation.clone().unwrap_or_else(|| "N/A".to_string())
                                        />
                                        <ReviewRow
                                            label="Annual Income"
                                            value=profile
                                                .income
                                                .map(format_currency)
                                                .unwrap_or_else(|| "N/A".to_string())
                                        />
                                        <ReviewRow
                                            label="Credit Score"
                                            value=profile
                                                .credit_score
                                                .map(|s| s.to_string())
                                                .unwrap_or_else(|| "N/A".to_string())
                                        />
                                    </dl>
                                </Card>
                            })
                        }}

                        <div class="flex gap-3">
                            <Button
                                variant=ButtonVariant::Success
                                disabled=Signal::derive(move || acting.get())
                                on_click=Callback::new(move |_| decide(true))
                            >
                                "Approve"
                            </Button>
                            <Button
                                variant=ButtonVariant::Danger
                                disabled=Signal::derive(move || acting.get())
                                on_click=Callback::new(move |_| decide(false))
                            >
                                "Reject"
                            </Button>
                        </div>
                    </div>
                }
                .into_any()
            }}
        </PortalLayout>
    }
}

#[component]
fn ReviewRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div>
            <dt class="text-sm text-[#617589]">{label}</dt>
            <dd class="mt-1 text-sm text-[#111518]">{value}</dd>
        </div>
    }
}

async fn fetch_application(loan_id: &str) -> Result<Loan, ApiError> {
    let response: LoanDetailResponse = get_json(&endpoints::bank_loan_details(loan_id)).await?;
    Ok(response.into_loan())
}

async fn fetch_applicant(customer_id: &str) -> Result<CustomerProfile, ApiError> {
    let response: ProfileResponse =
        get_json(&endpoints::customer_profile_by_id(customer_id)).await?;
    Ok(response.into_profile())
}

async fn submit_decision(loan_id: &str, approve: bool) -> Result<(), ApiError> {
    let url = if approve {
        endpoints::approve_loan(loan_id)
    } else {
        endpoints::reject_loan(loan_id)
    };
    let _: serde_json::Value = put_json(&url).await?;
    Ok(())
}
