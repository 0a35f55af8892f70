use std::fmt;

use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct AccountNumber(pub u32);

impl AccountNumber {
    pub const FIRST: Self = Self(1);

    pub fn next(&self) -> Self {
        return Self(self.0 + 1);
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
