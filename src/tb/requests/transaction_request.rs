use crate::ids::AccountNumber;
use crate::Money;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepositRequest {
    pub account_number: AccountNumber,
    pub amount: Money,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WithdrawalRequest {
    pub account_number: AccountNumber,
    pub amount: Money,
}
