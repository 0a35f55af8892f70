use crate::ids::{AccountNumber, TaxId};
use crate::Money;

use serde::Serialize;

/// Display row for an account, joined with its owner's name
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AccountSummary {
    pub branch_code: &'static str,
    pub account_number: AccountNumber,
    pub holder: String,
    pub tax_id: TaxId,
    pub balance: Money,
}
