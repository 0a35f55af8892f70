mod account;
mod account_summary;
mod customer;
mod transaction;

pub use account::{Account, BRANCH_CODE};
pub use account_summary::AccountSummary;
pub use customer::{Address, Customer};
pub use transaction::{Transaction, TransactionKind, TransactionLog};
