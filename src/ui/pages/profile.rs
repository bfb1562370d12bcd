//! Customer profile page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::api::{ApiError, get_json};
use crate::core::endpoints;
use crate::core::session::Role;
use crate::core::types::{CustomerProfile, ProfileResponse, format_currency, format_date};
use crate::ui::common::{Card, PortalLayout, Spinner};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let profile = RwSignal::new(None::<CustomerProfile>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            loading.set(true);
            match fetch_profile().await {
                Ok(p) => profile.set(Some(p)),
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    });

    view! {
        <PortalLayout role=Role::Customer active="profile" title="Profile">
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
                let Some(profile) = profile.get() else {
                    return view! {
                        <p class="text-[#617589] text-sm py-8 text-center">
                            "Profile could not be loaded"
                        </p>
                    }
                    .into_any();
                };

                let customer_id = profile
                    .id
                    .as_deref()
                    .map(|id| id.chars().take(8).collect::<String>())
                    .unwrap_or_else(|| "N/A".to_string());

                let avatar_initial = profile
                    .first_name
                    .as_deref()
                    .and_then(|n| n.chars().next())
                    .map(|c| c.to_uppercase().to_string())
                    .unwrap_or_else(|| "?".to_string());
                let full_name = profile.full_name();
                let joined = format_date(profile.created_at.as_deref());

                view! {
                    <div class="space-y-6 max-w-3xl">
                        <Card>
                            <div class="flex items-center gap-4">
                                <div class="w-16 h-16 rounded-full bg-[#f0f2f4] flex items-center
                                            justify-center text-xl font-bold text-[#617589]">
                                    {avatar_initial}
                                </div>
                                <div>
                                    <p class="text-xl font-bold text-[#111518]">{full_name}</p>
                                    <p class="text-sm text-[#617589]">
                                        {format!("Customer ID: {customer_id}")}
                                    </p>
                                    <p class="text-sm text-[#617589]">
                                        {format!("Joined: {joined}")}
                                    </p>
                                </div>
                            </div>
                        </Card>

                        <Card title="Contact">
                            <dl class="grid grid-cols-2 gap-x-8 gap-y-4">
                                <ProfileRow label="Email" value=profile.email.clone()/>
                                <ProfileRow label="Phone" value=profile.phone_number.clone()/>
                                <ProfileRow label="Address" value=profile.address.clone()/>
                                <ProfileRow label="City" value=profile.city.clone()/>
                                <ProfileRow label="State" value=profile.state.clone()/>
                            </dl>
                        </Card>

                        <Card title="Financial">
                            <dl class="grid grid-cols-2 gap-x-8 gap-y-4">
                                <ProfileRow
                                    label="Credit Score"
                                    value=profile.credit_score.map(|s| s.to_string())
                                />
                                <ProfileRow
                                    label="Annual Income"
                                    value=profile.income.map(format_currency)
                                />
                                <ProfileRow label="Occupation" value=profile.occupation.clone()/>
                            </dl>
                        </Card>
                    </div>
                }
                .into_any()
            }}
        </PortalLayout>
    }
}

#[component]
fn ProfileRow(label: &'static str, value: Option<String>) -> impl IntoView {
    view! {
        <div>
            <dt class="text-sm text-[#617589]">{label}</dt>
            <dd class="mt-1 text-sm text-[#111518]">
                {value.unwrap_or_else(|| "N/A".to_string())}
            </dd>
        </div>
    }
}

async fn fetch_profile() -> Result<CustomerProfile, ApiError> {
    let response: ProfileResponse = get_json(endpoints::CUSTOMER_PROFILE).await?;
    Ok(response.into_profile())
}
