//! Loan repayment page
//!
//! Pays down a loan from the wallet or a card; the payment may not exceed
//! the outstanding balance.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use serde::Serialize;

use crate::core::api::{ApiError, get_json, post_json};
use crate::core::endpoints;
use crate::core::session::{Role, stored_token, subject_id_from_token};
use crate::core::types::{Loan, LoanDetailResponse, format_currency};
use crate::ui::common::{FormField, PortalLayout, SelectField, Spinner};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RepaymentRequest {
    loan_id: String,
    amount: f64,
}

#[component]
pub fn RepayLoanPage() -> impl IntoView {
    let params = use_params_map();
    let loan_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    let loan = RwSignal::new(None::<Loan>);
    let loading = RwSignal::new(true);
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let payment_method = RwSignal::new(String::new());
    let payment_amount = RwSignal::new(String::new());

    Effect::new(move |_| {
        let id = loan_id.get();
        if id.is_empty() {
            return;
        }
        spawn_local(async move {
            loading.set(true);
            match fetch_loan(&id).await {
                Ok(l) => loan.set(Some(l)),
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        if payment_method.get().is_empty() {
            error.set(Some("Please select a payment method".to_string()));
            return;
        }

        let amount = match payment_amount.get().trim().parse::<f64>() {
            Ok(v) if v > 0.0 => v,
            _ => {
                error.set(Some("Please enter a valid payment amount".to_string()));
                return;
            }
        };

        let outstanding = loan
            .get()
            .and_then(|l| l.outstanding_balance)
            .unwrap_or(0.0);
        if amount > outstanding {
            error.set(Some(
                "Payment amount cannot exceed outstanding balance".to_string(),
            ));
            return;
        }

        let request = RepaymentRequest {
            loan_id: loan_id.get(),
            amount,
        };

        spawn_local(async move {
            submitting.set(true);
            match submit_payment(&request).await {
                Ok(()) => {
                    let navigate = use_navigate();
                    navigate(&format!("/loan/{}", request.loan_id), Default::default());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            submitting.set(false);
        });
    };

    view! {
        <PortalLayout role=Role::Customer active="loans" title="Repay Loan">
            <div class="max-w-[520px]">
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

                    view! {
                        <div class="mb-6 bg-white border border-[#dce1e5] rounded-xl p-6">
                            <p class="text-sm text-[#617589]">"Outstanding Balance"</p>
                            <p class="text-2xl font-bold text-[#111518]">
                                {format_currency(outstanding)}
                            </p>
                        </div>

                        <form on:submit=on_submit class="space-y-5 bg-white border border-[#dce1e5] rounded-xl p-6">
                            <SelectField
                                label="Payment Method".to_string()
                                required=true
                                options=vec![
                                    ("wallet".to_string(), "Wallet".to_string()),
                                    ("card".to_string(), "Debit Card".to_string()),
                                    ("bank_transfer".to_string(), "Bank Transfer".to_string()),
                                ]
                                value=Signal::derive(move || payment_method.get())
                                on_change=Callback::new(move |v| payment_method.set(v))
                            />
                            <FormField
                                label="Payment Amount".to_string()
                                required=true
                                input_type="number"
                                placeholder="0.00".to_string()
                                value=Signal::derive(move || payment_amount.get())
                                on_input=Callback::new(move |v| payment_amount.set(v))
                            />
                            <button
                                type="submit"
                                class="w-full py-2.5 bg-blue-600 hover:bg-blue-700 disabled:opacity-60
                                       text-white text-sm font-bold rounded-lg transition-colors"
                                disabled=move || submitting.get()
                            >
                                {move || if submitting.get() { "Processing..." } else { "Submit Payment" }}
                            </button>
                        </form>
                    }
                    .into_any()
                }}
            </div>
        </PortalLayout>
    }
}

async fn fetch_loan(loan_id: &str) -> Result<Loan, ApiError> {
    let customer_id = stored_token().as_deref().and_then(subject_id_from_token);
    let url = endpoints::loan_by_id(loan_id, customer_id.as_deref());
    let response: LoanDetailResponse = get_json(&url).await?;
    Ok(response.into_loan())
}

async fn submit_payment(request: &RepaymentRequest) -> Result<(), ApiError> {
    let _: serde_json::Value = post_json(endpoints::REPAY_LOAN, request).await?;
    Ok(())
}
