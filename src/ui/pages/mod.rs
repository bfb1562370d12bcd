mod bank_application_detail;
mod bank_applications;
mod bank_dashboard;
mod bank_login;
mod bank_register;
mod dashboard;
mod loan_apply;
mod loan_detail;
mod loans;
mod login;
mod not_found;
mod profile;
mod register;
mod repay;
mod wallet;

pub use bank_application_detail::BankApplicationDetailPage;
pub use bank_applications::BankApplicationsPage;
pub use bank_dashboard::BankDashboardPage;
pub use bank_login::BankLoginPage;
pub use bank_register::BankRegisterPage;
pub use dashboard::DashboardPage;
pub use loan_apply::LoanApplicationPage;
pub use loan_detail::LoanDetailsPage;
pub use loans::LoansPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use register::RegisterPage;
pub use repay::RepayLoanPage;
pub use wallet::WalletPage;
