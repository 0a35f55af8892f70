use super::{AccountRegistry, CustomerRegistry, RegistryError};

use crate::ids::{AccountNumber, TaxId};
use crate::models::{Account, AccountSummary, Customer};
use crate::requests::{
    DepositRequest, OpenAccountRequest, RegisterCustomerRequest, Request, Response, ResponseData,
    StatementRequest, WithdrawalRequest,
};
use crate::rules::TransactionError;
use crate::statement::AccountStatement;
use crate::{BankConfig, Money, MoneyError};

use thiserror::Error;

const UNKNOWN_HOLDER: &str = "Customer not found";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Transaction(#[from] TransactionError),

    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// In-memory bank state: the customer registry and the account registry.
///
/// Created once per process and passed around explicitly.
#[derive(Debug, Default)]
pub struct Bank {
    customers: CustomerRegistry,
    accounts: AccountRegistry,
}

impl Bank {
    pub fn new(config: BankConfig) -> Self {
        return Self {
            customers: CustomerRegistry::new(),
            accounts: AccountRegistry::new(config),
        };
    }

    pub fn customers(&self) -> &CustomerRegistry {
        &self.customers
    }

    pub fn accounts(&self) -> &AccountRegistry {
        &self.accounts
    }

    /// Dispatches a request, turning every failure into a failure response
    pub fn handle(&mut self, request: Request) -> Response {
        log::debug!("Handling request: {request:?}");

        let response = match request {
            Request::RegisterCustomer(request) => self.handle_register_customer(request),
            Request::OpenAccount(request) => self.handle_open_account(request),
            Request::ListAccounts => Ok(self.handle_list_accounts()),
            Request::Deposit(request) => self.handle_deposit(request),
            Request::Withdraw(request) => self.handle_withdrawal(request),
            Request::Statement(request) => self.handle_statement(request),
        };

        return response.unwrap_or_else(|e| {
            log::warn!("Request rejected: {e}");
            Response::failure(e.to_string())
        });
    }

    pub fn register_customer(&mut self, customer: Customer) -> Result<&Customer, BankError> {
        Ok(self.customers.register(customer)?)
    }

    pub fn open_account(&mut self, tax_id: &TaxId) -> Result<&Account, BankError> {
        Ok(self.accounts.open_account(&self.customers, tax_id)?)
    }

    /// Accounts in creation order, joined with their owner's name
    pub fn list_accounts(&self) -> Vec<AccountSummary> {
        return self
            .accounts
            .list()
            .iter()
            .map(|account| self.summarize(account))
            .collect();
    }

    pub fn deposit(&mut self, number: AccountNumber, amount: Money) -> Result<Money, BankError> {
        let account = self.find_mut(number)?;

        Ok(account.deposit(amount)?)
    }

    pub fn withdraw(&mut self, number: AccountNumber, amount: Money) -> Result<Money, BankError> {
        let account = self.find_mut(number)?;

        Ok(account.withdraw(amount)?)
    }

    pub fn statement(&self, number: AccountNumber) -> Result<AccountStatement, BankError> {
        let account = self
            .accounts
            .lookup(number)
            .ok_or(RegistryError::AccountNotFound(number))?;

        Ok(AccountStatement {
            branch_code: account.branch_code(),
            account_number: account.number(),
            statement: account.statement()?,
        })
    }

    fn find_mut(&mut self, number: AccountNumber) -> Result<&mut Account, RegistryError> {
        return self
            .accounts
            .lookup_mut(number)
            .ok_or(RegistryError::AccountNotFound(number));
    }

    fn summarize(&self, account: &Account) -> AccountSummary {
        let holder = self
            .customers
            .lookup(account.owner_tax_id())
            .map(|customer| customer.name.clone())
            .unwrap_or_else(|| UNKNOWN_HOLDER.to_string());

        return AccountSummary {
            branch_code: account.branch_code(),
            account_number: account.number(),
            holder,
            tax_id: account.owner_tax_id().clone(),
            balance: account.balance(),
        };
    }

    fn handle_register_customer(
        &mut self,
        request: RegisterCustomerRequest,
    ) -> Result<Response, BankError> {
        let customer = self.register_customer(request.into())?.clone();

        Ok(Response::success(
            "Customer registered successfully!",
            ResponseData::Customer(customer),
        ))
    }

    fn handle_open_account(&mut self, request: OpenAccountRequest) -> Result<Response, BankError> {
        let number = self.open_account(&request.tax_id)?.number();

        let summary = self
            .accounts
            .lookup(number)
            .map(|account| self.summarize(account))
            .ok_or(RegistryError::AccountNotFound(number))?;

        Ok(Response::success(
            format!("Account {number} created successfully!"),
            ResponseData::Account(summary),
        ))
    }

    fn handle_list_accounts(&self) -> Response {
        let accounts = self.list_accounts();

        return Response::success(
            format!("{} account(s) found", accounts.len()),
            ResponseData::Accounts(accounts),
        );
    }

    fn handle_deposit(&mut self, request: DepositRequest) -> Result<Response, BankError> {
        let balance = self.deposit(request.account_number, request.amount)?;

        Ok(Response::success(
            format!("Deposit of R$ {} completed successfully!", request.amount),
            ResponseData::Balance { balance },
        ))
    }

    fn handle_withdrawal(&mut self, request: WithdrawalRequest) -> Result<Response, BankError> {
        let balance = self.withdraw(request.account_number, request.amount)?;

        Ok(Response::success(
            format!("Withdrawal of R$ {} completed successfully!", request.amount),
            ResponseData::Balance { balance },
        ))
    }

    fn handle_statement(&self, request: StatementRequest) -> Result<Response, BankError> {
        let statement = self.statement(request.account_number)?;

        Ok(Response::success(
            format!(
                "Statement for account {}-{}",
                statement.branch_code, statement.account_number
            ),
            ResponseData::Statement(statement),
        ))
    }
}
