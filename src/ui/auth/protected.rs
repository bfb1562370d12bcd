//! Route protection for authenticated views
//!
//! Wraps a protected page and gates rendering on the session guard's
//! verdict: a missing, malformed or expired token redirects to the login
//! page; a valid one renders the children unchanged. The check runs once
//! per mount, so a session that expires mid-view is only caught on the
//! next protected navigation.

use leptos::prelude::*;

use crate::core::session::SessionVerdict;

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let verdict = RwSignal::new(None::<SessionVerdict>);

    Effect::new(move |_| {
        #[cfg(not(feature = "ssr"))]
        {
            use leptos_router::hooks::use_navigate;

            let outcome = crate::core::session::browser_guard().check();
            if !outcome.is_valid() {
                // Uniform redirect: the user sees the login page whether
                // they never signed in or their session lapsed
                let navigate = use_navigate();
                navigate("/login", Default::default());
            }
            verdict.set(Some(outcome));
        }
    });

    view! {
        {move || match verdict.get() {
            Some(SessionVerdict::Valid) => children().into_any(),
            // Redirect in flight, or the server-side render pass
            _ => ().into_any(),
        }}
    }
}
