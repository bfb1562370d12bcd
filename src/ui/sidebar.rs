//! Portal sidebar
//!
//! One component, two menus. The menu variant is selected by the decoded
//! role claim through the `SidebarMenu` trait rather than ad hoc
//! conditionals at every call site.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::session::Role;
use crate::ui::auth::logout;
use crate::ui::icon::{Icon, icons};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub path: &'static str,
}

/// Menu definition for one portal
pub trait SidebarMenu {
    fn title(&self) -> &'static str;
    fn items(&self) -> &'static [MenuItem];
}

pub struct CustomerMenu;

impl SidebarMenu for CustomerMenu {
    fn title(&self) -> &'static str {
        "LendWise"
    }

    fn items(&self) -> &'static [MenuItem] {
        &[
            MenuItem { id: "dashboard", label: "Dashboard", icon: icons::HOUSE, path: "/dashboard" },
            MenuItem { id: "loans", label: "Loans", icon: icons::HAND_COINS, path: "/loans" },
            MenuItem { id: "wallet", label: "Wallet", icon: icons::WALLET, path: "/wallet" },
            MenuItem { id: "profile", label: "Profile", icon: icons::USERS, path: "/profile" },
        ]
    }
}

pub struct BankMenu;

impl SidebarMenu for BankMenu {
    fn title(&self) -> &'static str {
        "LendWise Bank"
    }

    fn items(&self) -> &'static [MenuItem] {
        &[
            MenuItem { id: "dashboard", label: "Dashboard", icon: icons::HOUSE, path: "/bank/dashboard" },
            MenuItem { id: "applications", label: "Applications", icon: icons::APPLICATIONS, path: "/bank/applications" },
            MenuItem { id: "wallet", label: "Wallet", icon: icons::WALLET, path: "/wallet" },
        ]
    }
}

/// Menu for a role
pub fn menu_for(role: Role) -> &'static dyn SidebarMenu {
    match role {
        Role::Customer => &CustomerMenu,
        Role::Bank => &BankMenu,
    }
}

/// Portal sidebar with navigation and sign-out
#[component]
pub fn Sidebar(
    /// Role whose menu variant to render
    role: Role,
    /// Id of the menu item to highlight
    active: &'static str,
) -> impl IntoView {
    let menu = menu_for(role);

    let on_logout = move |_| {
        logout();
        let navigate = use_navigate();
        navigate("/login", Default::default());
    };

    view! {
        <div class="w-80 bg-white border-r border-[#dce1e5] flex flex-col">
            <div class="flex h-full min-h-[700px] flex-col justify-between bg-white p-4">
                <div class="flex flex-col gap-4">
                    <h1 class="text-[#111518] text-base font-medium leading-normal">
                        {menu.title()}
                    </h1>

                    // Menu items
                    <div class="flex flex-col gap-2">
                        {menu
                            .items()
                            .iter()
                            .map(|item| {
                                let is_active = item.id == active;
                                view! {
                                    <A
                                        href=item.path
                                        attr:class=if is_active {
                                            "flex items-center gap-3 px-3 py-2 rounded-lg transition-colors bg-[#f0f2f4]"
                                        } else {
                                            "flex items-center gap-3 px-3 py-2 rounded-lg transition-colors hover:bg-[#f5f5f5]"
                                        }
                                    >
                                        <Icon name=item.icon class="w-6 h-6"/>
                                        <p class="text-[#111518] text-sm font-medium leading-normal">
                                            {item.label}
                                        </p>
                                    </A>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                // Sign out
                <div class="flex flex-col gap-1">
                    <button
                        class="flex items-center gap-3 px-3 py-2 rounded-lg hover:bg-[#f5f5f5] transition-colors"
                        on:click=on_logout
                    >
                        <Icon name=icons::LOGOUT class="w-6 h-6"/>
                        <p class="text-[#111518] text-sm font-medium leading-normal">"Sign Out"</p>
                    </button>
                </div>
            </div>
        </div>
    }
}
