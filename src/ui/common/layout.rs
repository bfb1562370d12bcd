use leptos::prelude::*;

use crate::core::session::Role;
use crate::ui::sidebar::Sidebar;

/// Standard portal chrome: sidebar on the left, page content on the right
#[component]
pub fn PortalLayout(
    /// Role whose sidebar variant to render
    role: Role,
    /// Active sidebar item id
    active: &'static str,
    /// Page heading
    title: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-slate-50 flex">
            <Sidebar role=role active=active/>
            <main class="flex-1 px-10 py-8">
                <h1 class="text-[#111518] text-[32px] font-bold leading-tight mb-6">{title}</h1>
                {children()}
            </main>
        </div>
    }
}
