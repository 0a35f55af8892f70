mod open_account_request;
mod register_customer_request;
mod response;
mod statement_request;
mod transaction_request;

pub use open_account_request::OpenAccountRequest;
pub use register_customer_request::RegisterCustomerRequest;
pub use response::{Response, ResponseData};
pub use statement_request::StatementRequest;
pub use transaction_request::{DepositRequest, WithdrawalRequest};

/// Typed request, one per operation the bank exposes
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    RegisterCustomer(RegisterCustomerRequest),
    OpenAccount(OpenAccountRequest),
    ListAccounts,
    Deposit(DepositRequest),
    Withdraw(WithdrawalRequest),
    Statement(StatementRequest),
}
