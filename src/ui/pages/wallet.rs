//! Wallet page: balance, transaction history, fund and withdraw

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Serialize;

use crate::core::api::{ApiError, get_json, post_json};
use crate::core::endpoints;
use crate::core::session::Role;
use crate::core::types::{
    Wallet, WalletTransaction, WalletTransactionsResponse, format_currency, format_date,
};
use crate::ui::common::{Card, FormField, PortalLayout, Spinner, StatCard};

#[derive(Debug, Serialize)]
struct FundsRequest {
    amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

#[component]
pub fn WalletPage() -> impl IntoView {
    let wallet = RwSignal::new(Wallet::default());
    let transactions = RwSignal::new(Vec::<WalletTransaction>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    let amount = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let reload = move || {
        spawn_local(async move {
            loading.set(true);
            error.set(None);

            match fetch_wallet().await {
                Ok(w) => wallet.set(w),
                Err(e) => error.set(Some(e.to_string())),
            }
            match fetch_transactions().await {
                Ok(t) => transactions.set(t),
                Err(e) => error.set(Some(e.to_string())),
            }

            loading.set(false);
        });
    };

    Effect::new(move |_| reload());

    // Shared by the fund and withdraw buttons
    let submit_funds = move |withdraw: bool| {
        error.set(None);
        notice.set(None);

        let amount_val = match amount.get().trim().parse::<f64>() {
            Ok(v) if v > 0.0 => v,
            _ => {
                error.set(Some("Please enter a valid amount".to_string()));
                return;
            }
        };

        if withdraw && amount_val > wallet.get().balance {
            error.set(Some("Insufficient wallet balance".to_string()));
            return;
        }

        let request = FundsRequest {
            amount: amount_val,
            description: {
                let d = description.get();
                (!d.trim().is_empty()).then(|| d.trim().to_string())
            },
        };

        spawn_local(async move {
            submitting.set(true);
            let endpoint = if withdraw {
                endpoints::WALLET_WITHDRAW
            } else {
                endpoints::WALLET_FUND
            };
            match move_funds(endpoint, &request).await {
                Ok(()) => {
                    notice.set(Some(format!(
                        "Successfully {} {}",
                        if withdraw { "withdrew" } else { "added" },
                        format_currency(request.amount),
                    )));
                    amount.set(String::new());
                    description.set(String::new());
                    reload();
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            submitting.set(false);
        });
    };

    view! {
        <PortalLayout role=Role::Customer active="wallet" title="Wallet">
            {move || {
                error.get().map(|e| view! {
                    <div class="mb-4 p-3 bg-red-100 border border-red-300 rounded-lg">
                        <p class="text-sm text-red-700">{e}</p>
                    </div>
                })
            }}
            {move || {
                notice.get().map(|n| view! {
                    <div class="mb-4 p-3 bg-green-100 border border-green-300 rounded-lg">
                        <p class="text-sm text-green-700">{n}</p>
                    </div>
                })
            }}

            <div class="flex flex-wrap gap-4 mb-8">
                <StatCard
                    label="Balance"
                    value=Signal::derive(move || format_currency(wallet.get().balance))
                />
                <StatCard
                    label="Wallet Opened"
                    value=Signal::derive(move || {
                        format_date(wallet.get().date_created.as_deref())
                    })
                />
            </div>

            <div class="grid lg:grid-cols-2 gap-6 mb-8">
                <Card title="Move Funds">
                    <div class="space-y-4">
                        <FormField
                            label="Amount".to_string()
                            required=true
                            input_type="number"
                            placeholder="0.00".to_string()
                            value=Signal::derive(move || amount.get())
                            on_input=Callback::new(move |v| amount.set(v))
                        />
                        <FormField
                            label="Description".to_string()
                            placeholder="Optional note".to_string()
                            value=Signal::derive(move || description.get())
                            on_input=Callback::new(move |v| description.set(v))
                        />
                        <div class="flex gap-3">
                            <button
                                type="button"
                                class="flex-1 py-2.5 bg-green-600 hover:bg-green-700 disabled:opacity-60
                                       text-white text-sm font-bold rounded-lg transition-colors"
                                disabled=move || submitting.get()
                                on:click=move |_| submit_funds(false)
                            >
                                "Add Funds"
                            </button>
                            <button
                                type="button"
                                class="flex-1 py-2.5 bg-red-600 hover:bg-red-700 disabled:opacity-60
                                       text-white text-sm font-bold rounded-lg transition-colors"
                                disabled=move || submitting.get()
                                on:click=move |_| submit_funds(true)
                            >
                                "Withdraw"
                            </button>
                        </div>
                    </div>
                </Card>
            </div>

            <h2 class="text-[#111518] text-[22px] font-bold leading-tight mb-4">
                "Transactions"
            </h2>
            {move || {
                if loading.get() {
                    view! { <Spinner/> }.into_any()
                } else if transactions.get().is_empty() {
                    view! {
                        <p class="text-[#617589] text-sm py-8 text-center">"No transactions yet"</p>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="bg-white border border-[#dce1e5] rounded-xl overflow-hidden">
                            <table class="w-full text-left">
                                <thead>
                                    <tr class="border-b border-[#dce1e5]">
                                        <th class="px-6 py-3 text-sm font-medium text-[#111518]">"Reference"</th>
                                        <th class="px-6 py-3 text-sm font-medium text-[#111518]">"Date"</th>
                                        <th class="px-6 py-3 text-sm font-medium text-[#111518]">"Type"</th>
                                        <th class="px-6 py-3 text-sm font-medium text-[#111518]">"Amount"</th>
                                        <th class="px-6 py-3 text-sm font-medium text-[#111518]">"Description"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {transactions
                                        .get()
                                        .into_iter()
                                        .map(|tx| {
                                            let debit = tx.is_debit();
                                            let reference = tx
                                                .id
                                                .as_deref()
                                                .map(|id| id.chars().take(8).collect::<String>())
                                                .unwrap_or_else(|| "N/A".to_string());
                                            let tx_type = tx
                                                .transaction_type
                                                .clone()
                                                .map(|t| t.replace('_', " ").to_uppercase())
                                                .unwrap_or_else(|| "N/A".to_string());
                                            view! {
                                                <tr class="border-t border-[#dce1e5] hover:bg-slate-50 transition-colors">
                                                    <td class="px-6 py-4 text-sm text-[#617589]">{reference}</td>
                                                    <td class="px-6 py-4 text-sm text-[#617589]">
                                                        {format_date(tx.created_at.as_deref())}
                                                    </td>
                                                    <td class="px-6 py-4 text-sm text-[#111518]">{tx_type}</td>
                                                    <td class=format!(
                                                        "px-6 py-4 text-sm font-medium {}",
                                                        if debit { "text-red-600" } else { "text-green-600" }
                                                    )>
                                                        {format!(
                                                            "{}{}",
                                                            if debit { "-" } else { "+" },
                                                            format_currency(tx.amount)
                                                        )}
                                                    </td>
                                                    <td class="px-6 py-4 text-sm text-[#617589]">
                                                        {tx
                                                            .description
                                                            .clone()
                                                            .or(tx.reference.clone())
                                                            .unwrap_or_else(|| "N/A".to_string())}
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

async fn fetch_wallet() -> Result<Wallet, ApiError> {
    get_json(endpoints::WALLET).await
}

async fn fetch_transactions() -> Result<Vec<WalletTransaction>, ApiError> {
    let response: WalletTransactionsResponse = get_json(endpoints::WALLET_TRANSACTIONS).await?;
    Ok(response.transactions)
}

async fn move_funds(endpoint: &str, request: &FundsRequest) -> Result<(), ApiError> {
    let _: serde_json::Value = post_json(endpoint, request).await?;
    Ok(())
}
