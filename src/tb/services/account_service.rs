use super::{CustomerRegistry, RegistryError};

use crate::ids::{AccountNumber, TaxId};
use crate::models::Account;
use crate::BankConfig;

/// Accounts in creation order. Owns the account number sequence.
#[derive(Debug)]
pub struct AccountRegistry {
    accounts: Vec<Account>,
    next_number: AccountNumber,
    config: BankConfig,
}

impl AccountRegistry {
    pub fn new(config: BankConfig) -> Self {
        return Self {
            accounts: Vec::new(),
            next_number: AccountNumber::FIRST,
            config,
        };
    }

    /// Opens an account for an already registered customer.
    ///
    /// A failed attempt does not consume an account number.
    pub fn open_account(
        &mut self,
        customers: &CustomerRegistry,
        tax_id: &TaxId,
    ) -> Result<&Account, RegistryError> {
        if customers.lookup(tax_id).is_none() {
            return Err(RegistryError::CustomerNotFound(tax_id.clone()));
        }

        let number = self.next_number;
        self.next_number = number.next();

        log::debug!("Opening account {number} for customer {tax_id}");

        let index = self.accounts.len();
        self.accounts
            .push(Account::new(number, tax_id.clone(), &self.config));

        return Ok(&self.accounts[index]);
    }

    pub fn lookup(&self, number: AccountNumber) -> Option<&Account> {
        return self.accounts.iter().find(|account| account.number() == number);
    }

    pub fn lookup_mut(&mut self, number: AccountNumber) -> Option<&mut Account> {
        return self
            .accounts
            .iter_mut()
            .find(|account| account.number() == number);
    }

    pub fn list(&self) -> &[Account] {
        &self.accounts
    }

    /// Number the next successfully opened account will get
    pub fn next_number(&self) -> AccountNumber {
        self.next_number
    }
}

impl Default for AccountRegistry {
    fn default() -> Self {
        Self::new(BankConfig::default())
    }
}
