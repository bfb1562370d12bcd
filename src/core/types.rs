//! Wire types for backend responses
//!
//! Display-only shapes. The backend computes every monetary value
//! (interest, balances, schedules); the client just renders them.
//! Fields default when absent because the API omits nulls freely.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub loan_type_name: Option<String>,
    #[serde(default)]
    pub interest_rate: Option<f64>,
    #[serde(default)]
    pub tenure_month: Option<i64>,
    #[serde(default)]
    pub outstanding_balance: Option<f64>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Applicant name columns on the bank's pending list
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl Loan {
    pub fn applicant_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }
}

/// Loan list responses arrive as `{ loans: [...] }` or `{ data: [...] }`
/// depending on the endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoanListResponse {
    #[serde(default)]
    pub loans: Option<Vec<Loan>>,
    #[serde(default)]
    pub data: Option<Vec<Loan>>,
}

impl LoanListResponse {
    pub fn into_loans(self) -> Vec<Loan> {
        self.loans.or(self.data).unwrap_or_default()
    }
}

/// Detail responses wrap the loan or return it bare
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LoanDetailResponse {
    Wrapped { loan: Loan },
    Bare(Loan),
}

impl LoanDetailResponse {
    pub fn into_loan(self) -> Loan {
        match self {
            LoanDetailResponse::Wrapped { loan } => loan,
            LoanDetailResponse::Bare(loan) => loan,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanType {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanSummary {
    #[serde(default)]
    pub total_loans: i64,
    #[serde(default)]
    pub active_loans: i64,
    #[serde(default)]
    pub total_borrowed: f64,
    #[serde(default)]
    pub total_outstanding: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepaymentRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub amount_paid: f64,
    #[serde(default)]
    pub payment_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "type", default)]
    pub method: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepaymentHistoryResponse {
    #[serde(default)]
    pub repayment_history: Vec<RepaymentRecord>,
}

/// The wallet payload keeps the backend's snake_case columns
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Wallet {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub date_created: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WalletTransaction {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub transaction_type: Option<String>,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl WalletTransaction {
    pub fn is_debit(&self) -> bool {
        self.transaction_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case("debit"))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WalletTransactionsResponse {
    #[serde(default)]
    pub transactions: Vec<WalletTransaction>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfile {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub income: Option<f64>,
    #[serde(default)]
    pub credit_score: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl CustomerProfile {
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }
}

/// Profile responses wrap the customer or return it bare
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProfileResponse {
    Wrapped { customer: CustomerProfile },
    Bare(CustomerProfile),
}

impl ProfileResponse {
    pub fn into_profile(self) -> CustomerProfile {
        match self {
            ProfileResponse::Wrapped { customer } => customer,
            ProfileResponse::Bare(customer) => customer,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankMetrics {
    #[serde(default)]
    pub total_loans: i64,
    #[serde(default)]
    pub pending_applications: i64,
    #[serde(default)]
    pub approved_loans: i64,
    #[serde(default)]
    pub total_disbursed: f64,
}

/// Format a backend amount the way the tables display money
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;
    let mut digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    while digits.len() > 3 {
        let rest = digits.split_off(digits.len() - 3);
        grouped = if grouped.is_empty() {
            rest
        } else {
            format!("{rest},{grouped}")
        };
    }
    grouped = if grouped.is_empty() {
        digits
    } else {
        format!("{digits},{grouped}")
    };
    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{frac:02}")
}

/// Trim an ISO-8601 timestamp down to its date for table cells
pub fn format_date(value: Option<&str>) -> String {
    match value {
        Some(v) => v.get(..10).unwrap_or(v).to_string(),
        None => "N/A".to_string(),
    }
}
