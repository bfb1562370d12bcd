use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::ui::auth::{ProtectedRoute, provide_auth_context};
use crate::ui::pages::{
    BankApplicationDetailPage, BankApplicationsPage, BankDashboardPage, BankLoginPage,
    BankRegisterPage, DashboardPage, LoanApplicationPage, LoanDetailsPage, LoansPage, LoginPage,
    NotFoundPage, ProfilePage, RegisterPage, RepayLoanPage, WalletPage,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Auth state restored from localStorage after hydration
    let _auth_ctx = provide_auth_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/lendwise.css"/>

        // sets the document title
        <Title text="LendWise - Loan Management"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                // Public entry points
                <Route path=path!("/") view=|| view! { <Redirect path="/login"/> }/>
                <Route path=path!("/login") view=LoginPage/>
                <Route path=path!("/register") view=RegisterPage/>
                <Route path=path!("/bank/login") view=BankLoginPage/>
                <Route path=path!("/bank/register") view=BankRegisterPage/>

                // Customer portal
                <Route path=path!("/dashboard") view=|| view! {
                    <ProtectedRoute><DashboardPage/></ProtectedRoute>
                }/>
                <Route path=path!("/loans") view=|| view! {
                    <ProtectedRoute><LoansPage/></ProtectedRoute>
                }/>
                <Route path=path!("/loan_request") view=|| view! {
                    <ProtectedRoute><LoanApplicationPage/></ProtectedRoute>
                }/>
                <Route path=path!("/loan/:id") view=|| view! {
                    <ProtectedRoute><LoanDetailsPage/></ProtectedRoute>
                }/>
                <Route path=path!("/repay/:id") view=|| view! {
                    <ProtectedRoute><RepayLoanPage/></ProtectedRoute>
                }/>
                <Route path=path!("/wallet") view=|| view! {
                    <ProtectedRoute><WalletPage/></ProtectedRoute>
                }/>
                <Route path=path!("/profile") view=|| view! {
                    <ProtectedRoute><ProfilePage/></ProtectedRoute>
                }/>

                // Bank portal
                <Route path=path!("/bank/dashboard") view=|| view! {
                    <ProtectedRoute><BankDashboardPage/></ProtectedRoute>
                }/>
                <Route path=path!("/bank/applications") view=|| view! {
                    <ProtectedRoute><BankApplicationsPage/></ProtectedRoute>
                }/>
                <Route path=path!("/bank/applications/:id") view=|| view! {
                    <ProtectedRoute><BankApplicationDetailPage/></ProtectedRoute>
                }/>
            </Routes>
        </Router>
    }
}
