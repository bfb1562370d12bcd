//! Loan application form
//!
//! Amount, loan type and tenure; the backend computes rates and schedules.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use serde::Serialize;

use crate::core::api::{ApiError, get_json, post_json};
use crate::core::endpoints;
use crate::core::session::Role;
use crate::core::types::LoanType;
use crate::ui::common::{FormField, PortalLayout, SelectField};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoanRequest {
    amount: f64,
    loan_type_id: String,
    tenure_month: i64,
}

#[component]
pub fn LoanApplicationPage() -> impl IntoView {
    let loan_types = RwSignal::new(Vec::<LoanType>::new());

    let amount = RwSignal::new(String::new());
    let loan_type = RwSignal::new(String::new());
    let tenure = RwSignal::new(String::new());

    let amount_error = RwSignal::new(None::<String>);
    let type_error = RwSignal::new(None::<String>);
    let tenure_error = RwSignal::new(None::<String>);

    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let submitted = RwSignal::new(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match fetch_loan_types().await {
                Ok(types) => loan_types.set(types),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    });

    let validate = move || -> Option<LoanRequest> {
        let mut ok = true;

        let amount_val = match amount.get().trim().parse::<f64>() {
            Ok(v) if v > 0.0 => {
                amount_error.set(None);
                v
            }
            _ => {
                amount_error.set(Some("Please enter a valid loan amount".to_string()));
                ok = false;
                0.0
            }
        };

        let type_val = loan_type.get();
        if type_val.is_empty() {
            type_error.set(Some("Loan type is required".to_string()));
            ok = false;
        } else {
            type_error.set(None);
        }

        let tenure_val = match tenure.get().trim().parse::<i64>() {
            Ok(v) if v > 0 => {
                tenure_error.set(None);
                v
            }
            _ => {
                tenure_error.set(Some("Please enter a valid loan term in months".to_string()));
                ok = false;
                0
            }
        };

        ok.then(|| LoanRequest {
            amount: amount_val,
            loan_type_id: type_val,
            tenure_month: tenure_val,
        })
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let Some(request) = validate() else {
            return;
        };

        spawn_local(async move {
            submitting.set(true);
            match submit_application(&request).await {
                Ok(()) => {
                    submitted.set(true);
                    amount.set(String::new());
                    loan_type.set(String::new());
                    tenure.set(String::new());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            submitting.set(false);
        });
    };

    view! {
        <PortalLayout role=Role::Customer active="loans" title="Apply for a Loan">
            <div class="max-w-[520px]">
                {move || {
                    error.get().map(|e| view! {
                        <div class="mb-4 p-3 bg-red-100 border border-red-300 rounded-lg">
                            <p class="text-sm text-red-700">{e}</p>
                        </div>
                    })
                }}

                {move || {
                    submitted.get().then(|| view! {
                        <div class="mb-4 p-3 bg-green-100 border border-green-300 rounded-lg">
                            <p class="text-sm text-green-700">
                                "Application submitted. You can track its status on the loans page."
                            </p>
                        </div>
                    })
                }}

                <form on:submit=on_submit class="space-y-5 bg-white border border-[#dce1e5] rounded-xl p-6">
                    <FormField
                        label="Loan Amount".to_string()
                        required=true
                        input_type="number"
                        placeholder="10000".to_string()
                        value=Signal::derive(move || amount.get())
                        on_input=Callback::new(move |v| { amount.set(v); amount_error.set(None); })
                        error=Signal::derive(move || amount_error.get())
                    />

                    {move || {
                        let options = loan_types
                            .get()
                            .into_iter()
                            .map(|t| (t.id, t.name))
                            .collect::<Vec<_>>();
                        view! {
                            <SelectField
                                label="Loan Type".to_string()
                                required=true
                                options=options
                                value=Signal::derive(move || loan_type.get())
                                on_change=Callback::new(move |v| { loan_type.set(v); type_error.set(None); })
                                error=Signal::derive(move || type_error.get())
                            />
                        }
                    }}

                    <FormField
                        label="Loan Term (months)".to_string()
                        required=true
                        input_type="number"
                        placeholder="12".to_string()
                        value=Signal::derive(move || tenure.get())
                        on_input=Callback::new(move |v| { tenure.set(v); tenure_error.set(None); })
                        error=Signal::derive(move || tenure_error.get())
                    />

                    <div class="flex gap-3">
                        <button
                            type="submit"
                            class="flex-1 py-2.5 bg-blue-600 hover:bg-blue-700 disabled:opacity-60
                                   text-white text-sm font-bold rounded-lg transition-colors"
                            disabled=move || submitting.get()
                        >
                            {move || if submitting.get() { "Submitting..." } else { "Submit Application" }}
                        </button>
                        <button
                            type="button"
                            class="py-2.5 px-4 bg-[#f0f2f4] hover:bg-[#e4e7ea] text-[#111518]
                                   text-sm font-bold rounded-lg transition-colors"
                            on:click=move |_| {
                                let navigate = use_navigate();
                                navigate("/loans", Default::default());
                            }
                        >
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </PortalLayout>
    }
}

async fn fetch_loan_types() -> Result<Vec<LoanType>, ApiError> {
    get_json(endpoints::LOAN_TYPES).await
}

async fn submit_application(request: &LoanRequest) -> Result<(), ApiError> {
    let _: serde_json::Value = post_json(endpoints::LOANS, request).await?;
    Ok(())
}
