//! REST endpoint paths
//!
//! All requests go to the same origin under `/api`; the dev/prod proxy in
//! front of the backend owns the actual host. Keep every path here so the
//! pages never hand-assemble URLs.

// Auth
pub const LOGIN: &str = "/api/auth/login";
pub const REGISTER: &str = "/api/auth/register";
pub const BANK_LOGIN: &str = "/api/auth/bankLogin";
pub const BANK_REGISTER: &str = "/api/auth/bank/register";

// Customer
pub const CUSTOMER_PROFILE: &str = "/api/customers/profile";

pub fn customer_profile_by_id(customer_id: &str) -> String {
    format!("/api/customers/profile/{customer_id}")
}

// Loans
pub const LOANS: &str = "/api/loans";
pub const ACTIVE_LOANS: &str = "/api/loans/active";
pub const LOAN_TYPES: &str = "/api/loans/types";
pub const LOAN_SUMMARY: &str = "/api/loans/summary";
pub const REPAY_LOAN: &str = "/api/loans/repay";

/// Loan detail. The backend exposes a customer-scoped variant used by both
/// the repay page and the bank review page.
pub fn loan_by_id(loan_id: &str, customer_id: Option<&str>) -> String {
    match customer_id {
        Some(cid) => format!("/api/loans/{loan_id}/customerId/{cid}"),
        None => format!("/api/loans/{loan_id}"),
    }
}

pub fn repayment_history(loan_id: &str) -> String {
    format!("/api/loans/{loan_id}/repayment_history")
}

// Wallet
pub const WALLET: &str = "/api/wallet";
pub const WALLET_TRANSACTIONS: &str = "/api/wallet/transactions";
pub const WALLET_FUND: &str = "/api/wallet/fund";
pub const WALLET_WITHDRAW: &str = "/api/wallet/withdraw";

// Bank
pub const BANKS: &str = "/api/banks";
pub const BANK_METRICS: &str = "/api/banks/metrics";
pub const PENDING_LOANS: &str = "/api/banks/loans/pending";

pub fn approve_loan(loan_id: &str) -> String {
    format!("/api/banks/loans/{loan_id}/approve")
}

pub fn reject_loan(loan_id: &str) -> String {
    format!("/api/banks/loans/{loan_id}/reject")
}

pub fn bank_loan_details(loan_id: &str) -> String {
    format!("/api/banks/loans/{loan_id}")
}
