use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (without the .svg extension)
    name: &'static str,
    /// CSS classes for sizing/coloring
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Predefined icon names
#[allow(dead_code)]
pub mod icons {
    pub const HOUSE: &str = "house";
    pub const USERS: &str = "users";
    pub const HAND_COINS: &str = "hand-coins";
    pub const CREDIT_CARD: &str = "credit-card";
    pub const WALLET: &str = "wallet";
    pub const APPLICATIONS: &str = "applications";
    pub const CHART: &str = "presentation-chart";
    pub const GEAR: &str = "gear";
    pub const SEARCH: &str = "search";
    pub const PLUS: &str = "plus";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const CHECK: &str = "check";
    pub const X: &str = "x";
    pub const LOGOUT: &str = "logout";
}
