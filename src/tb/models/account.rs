use super::{Transaction, TransactionLog};

use crate::ids::{AccountNumber, TaxId};
use crate::rules::{self, DepositParams, TransactionError, WithdrawalParams};
use crate::statement::{build_statement, Statement};
use crate::{BankConfig, Money, MoneyError};

use chrono::{Local, NaiveDateTime};

/// Every account belongs to the same branch
pub const BRANCH_CODE: &str = "0001";

/// Bank account, owned by a customer referenced by tax ID.
///
/// Balance, log and withdrawal counter only change through [`Account::deposit`] and
/// [`Account::withdraw`], which apply the rules in [`crate::rules`].
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    number: AccountNumber,
    owner_tax_id: TaxId,
    balance: Money,
    transactions: TransactionLog,
    withdrawals_today: u32,
    per_withdrawal_limit: Money,
    daily_withdrawal_limit: u32,
}

impl Account {
    pub fn new(number: AccountNumber, owner_tax_id: TaxId, config: &BankConfig) -> Self {
        return Self {
            number,
            owner_tax_id,
            balance: Money::ZERO,
            transactions: TransactionLog::new(),
            withdrawals_today: 0,
            per_withdrawal_limit: config.per_withdrawal_limit,
            daily_withdrawal_limit: config.daily_withdrawal_limit,
        };
    }

    pub fn branch_code(&self) -> &'static str {
        BRANCH_CODE
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn owner_tax_id(&self) -> &TaxId {
        &self.owner_tax_id
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn withdrawals_today(&self) -> u32 {
        self.withdrawals_today
    }

    pub fn per_withdrawal_limit(&self) -> Money {
        self.per_withdrawal_limit
    }

    pub fn daily_withdrawal_limit(&self) -> u32 {
        self.daily_withdrawal_limit
    }

    /// Deposits `amount`, returning the new balance
    pub fn deposit(&mut self, amount: Money) -> Result<Money, TransactionError> {
        self.deposit_at(amount, Local::now().naive_local())
    }

    pub fn deposit_at(
        &mut self,
        amount: Money,
        at: NaiveDateTime,
    ) -> Result<Money, TransactionError> {
        let outcome = rules::deposit(
            DepositParams {
                balance: self.balance,
                amount,
            },
            at,
        )?;

        self.balance = outcome.balance;
        self.transactions.push(outcome.entry);

        Ok(self.balance)
    }

    /// Withdraws `amount`, returning the new balance
    pub fn withdraw(&mut self, amount: Money) -> Result<Money, TransactionError> {
        self.withdraw_at(amount, Local::now().naive_local())
    }

    pub fn withdraw_at(
        &mut self,
        amount: Money,
        at: NaiveDateTime,
    ) -> Result<Money, TransactionError> {
        let outcome = rules::withdraw(
            WithdrawalParams {
                balance: self.balance,
                amount,
                per_withdrawal_limit: self.per_withdrawal_limit,
                withdrawals_today: self.withdrawals_today,
                daily_withdrawal_limit: self.daily_withdrawal_limit,
            },
            at,
        )?;

        self.balance = outcome.balance;
        self.transactions.push(outcome.entry);
        self.withdrawals_today = outcome.withdrawals_today;

        Ok(self.balance)
    }

    pub fn statement(&self) -> Result<Statement, MoneyError> {
        build_statement(self.balance, &self.transactions)
    }
}
