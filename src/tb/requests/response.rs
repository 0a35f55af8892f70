use crate::models::{AccountSummary, Customer};
use crate::statement::AccountStatement;
use crate::Money;

use serde::Serialize;

/// Outcome of a request: a success flag, a human readable message and, on success, the
/// relevant data
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Response {
    pub success: bool,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ResponseData {
    Customer(Customer),
    Account(AccountSummary),
    Accounts(Vec<AccountSummary>),
    Balance { balance: Money },
    Statement(AccountStatement),
}

impl Response {
    pub fn success(message: impl Into<String>, data: ResponseData) -> Self {
        return Self {
            success: true,
            message: message.into(),
            data: Some(data),
        };
    }

    pub fn failure(message: impl Into<String>) -> Self {
        return Self {
            success: false,
            message: message.into(),
            data: None,
        };
    }
}
