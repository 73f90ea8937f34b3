use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Transaction amount used as input of the fee calculation.
/// Backed by a `Decimal` so fees keep full precision until display.
/// An Amount is always finite and never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount {
    value: Decimal,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AmountError {
    #[error("Amount parsing error: {0}")]
    Parse(String),

    #[error("Amount must not be negative: {0}")]
    Negative(Decimal),

    #[error("Amount must be finite: {0}")]
    NonFinite(f64),

    #[error("Overflow error while computing with Amount")]
    Overflow,
}

impl Amount {
    pub fn new() -> Self {
        Amount {
            value: Decimal::ZERO,
        }
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value.is_sign_negative() && !value.is_zero() {
            Err(AmountError::Negative(value))?
        }
        // Normalise "-0" coming from parsed input
        Ok(Amount { value: value.abs() })
    }
}

impl TryFrom<f64> for Amount {
    type Error = AmountError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            Err(AmountError::NonFinite(value))?
        }
        let decimal = Decimal::from_f64(value).ok_or(AmountError::Overflow)?;
        Amount::try_from(decimal)
    }
}

impl TryFrom<&str> for Amount {
    type Error = AmountError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            Err(AmountError::Parse(s.into()))?
        }

        let value = match Decimal::from_str(s) {
            Ok(v) => v,
            Err(_) => Err(AmountError::Parse(s.into()))?,
        };

        Amount::try_from(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
