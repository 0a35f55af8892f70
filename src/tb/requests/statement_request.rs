use crate::ids::AccountNumber;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatementRequest {
    pub account_number: AccountNumber,
}
