use std::{fmt, str::FromStr};

use serde::{Serialize, Serializer};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1:?} and {2:?}")]
    Overflow(&'static str, Money, Money),

    #[error("Invalid amount '{1}': {0}")]
    Parse(&'static str, String),
}

/// Fixed-point currency amount, stored in cents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub i64);

impl Money {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);

    const CENTS_PER_UNIT: i64 = 100;

    /// Builds an amount from whole currency units
    pub const fn from_units(units: i64) -> Self {
        Self(units * Self::CENTS_PER_UNIT)
    }

    /// Parses a decimal string such as `"1000"`, `"12.5"` or `"-0.01"`.
    ///
    /// At most two fractional digits are accepted. Zero and negative amounts parse fine,
    /// rejecting them is up to the rule being applied.
    pub fn parse(string: &str) -> Result<Self, MoneyError> {
        let trimmed = string.trim();

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let mut parts = unsigned.split('.');

        if parts.clone().count() > 2 {
            return Err(MoneyError::Parse("too many decimal points", string.to_string()));
        }

        let units = parts.next().unwrap_or_default();
        let cents = parts.next();

        if units.is_empty() && cents.map_or(true, str::is_empty) {
            return Err(MoneyError::Parse("no digits", string.to_string()));
        }

        let is_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());

        if !is_digits(units) || !cents.map_or(true, is_digits) {
            return Err(MoneyError::Parse("not a number", string.to_string()));
        }

        let cents = match cents {
            None | Some("") => "00".to_string(),
            Some(cents) if cents.len() > 2 => {
                return Err(MoneyError::Parse("too many decimal places", string.to_string()))
            }
            Some(cents) => format!("{:0<2}", cents),
        };

        let overflow = || MoneyError::Parse("amount out of range", string.to_string());

        let units: i64 = if units.is_empty() {
            0
        } else {
            units.parse().map_err(|_| overflow())?
        };
        let cents: i64 = cents.parse().map_err(|_| overflow())?;

        let value = units
            .checked_mul(Self::CENTS_PER_UNIT)
            .and_then(|value| value.checked_add(cents))
            .ok_or_else(overflow)?;

        Ok(if negative { Money(-value) } else { Money(value) })
    }

    pub fn checked_add(&self, other: &Self) -> Result<Self, MoneyError> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or(MoneyError::Overflow("add", *self, *other))
    }

    pub fn checked_sub(&self, other: &Self) -> Result<Self, MoneyError> {
        self.0
            .checked_sub(other.0)
            .map(Money)
            .ok_or(MoneyError::Overflow("sub", *self, *other))
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per_unit = Self::CENTS_PER_UNIT as u64;

        return write!(f, "{sign}{}.{:02}", abs / per_unit, abs % per_unit);
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Serialized as a decimal string so no precision is lost in transit
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
