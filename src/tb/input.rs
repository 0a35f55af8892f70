use crate::ids::{AccountNumber, TaxId};
use crate::models::Address;
use crate::requests::{
    DepositRequest, OpenAccountRequest, RegisterCustomerRequest, Request, StatementRequest,
    WithdrawalRequest,
};
use crate::Money;
use crate::Result;

use chrono::NaiveDate;

use serde::Deserialize;

use thiserror::Error;

const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Represents a request row that a CSV record would deserialize into.
///
/// Every column other than `type` is optional, each request type only needs a few.
#[derive(Deserialize, Debug, Clone)]
pub struct InputRequest {
    #[serde(rename = "type")]
    pub typ: InputRequestType,

    pub tax_id: Option<String>,
    pub name: Option<String>,
    pub birth_date: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub district: Option<String>,
    pub city_state: Option<String>,
    pub account: Option<String>,
    pub amount: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InputRequestType {
    RegisterCustomer,
    OpenAccount,
    ListAccounts,
    Deposit,
    Withdraw,
    Statement,
}

#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("Missing field `{0}` for {1:?} request")]
    MissingField(&'static str, InputRequestType),

    #[error("Invalid birth date '{0}', expected YYYY-MM-DD")]
    InvalidBirthDate(String),

    #[error("Invalid account number '{0}'")]
    InvalidAccountNumber(String),
}

impl InputRequest {
    pub fn parse_request(self) -> Result<Request> {
        let request = match self.typ {
            InputRequestType::RegisterCustomer => {
                let birth_date = self.required("birth_date", &self.birth_date)?;
                let birth_date = NaiveDate::parse_from_str(birth_date.trim(), BIRTH_DATE_FORMAT)
                    .map_err(|_| InputParseError::InvalidBirthDate(birth_date.to_string()))?;

                Request::RegisterCustomer(RegisterCustomerRequest {
                    name: self.required("name", &self.name)?.to_string(),
                    birth_date,
                    tax_id: TaxId::new(self.required("tax_id", &self.tax_id)?),
                    address: Address {
                        street: self.required("street", &self.street)?.to_string(),
                        number: self.required("number", &self.number)?.to_string(),
                        district: self.required("district", &self.district)?.to_string(),
                        city_state: self.required("city_state", &self.city_state)?.to_string(),
                    },
                })
            }
            InputRequestType::OpenAccount => Request::OpenAccount(OpenAccountRequest {
                tax_id: TaxId::new(self.required("tax_id", &self.tax_id)?),
            }),
            InputRequestType::ListAccounts => Request::ListAccounts,
            InputRequestType::Deposit => Request::Deposit(DepositRequest {
                account_number: self.account_number()?,
                amount: self.amount()?,
            }),
            InputRequestType::Withdraw => Request::Withdraw(WithdrawalRequest {
                account_number: self.account_number()?,
                amount: self.amount()?,
            }),
            InputRequestType::Statement => Request::Statement(StatementRequest {
                account_number: self.account_number()?,
            }),
        };

        Ok(request)
    }

    fn required<'a>(
        &self,
        field: &'static str,
        value: &'a Option<String>,
    ) -> std::result::Result<&'a str, InputParseError> {
        return value
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .ok_or(InputParseError::MissingField(field, self.typ));
    }

    fn account_number(&self) -> Result<AccountNumber> {
        let account = self.required("account", &self.account)?;

        let number = account
            .trim()
            .parse()
            .map_err(|_| InputParseError::InvalidAccountNumber(account.to_string()))?;

        Ok(AccountNumber(number))
    }

    fn amount(&self) -> Result<Money> {
        let amount = self.required("amount", &self.amount)?;

        Ok(Money::parse(amount)?)
    }
}
