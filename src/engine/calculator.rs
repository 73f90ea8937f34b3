use crate::engine::amount::{Amount, AmountError};
use crate::engine::quote::FeeQuote;
use crate::engine::scheme::FeeScheme;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeeError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] AmountError),
}

/// Computes the fee of an amount under two competing schemes.
/// Stateless: the same calculator can quote any number of amounts.
#[derive(Debug, Clone, PartialEq)]
pub struct FeeCalculator {
    scheme_a: FeeScheme,
    scheme_b: FeeScheme,
}

impl Default for FeeCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl FeeCalculator {
    pub fn new() -> Self {
        FeeCalculator {
            scheme_a: FeeScheme::scheme_a(),
            scheme_b: FeeScheme::scheme_b(),
        }
    }

    pub fn with_schemes(scheme_a: FeeScheme, scheme_b: FeeScheme) -> Self {
        FeeCalculator { scheme_a, scheme_b }
    }

    pub fn scheme_a(&self) -> &FeeScheme {
        &self.scheme_a
    }

    pub fn scheme_b(&self) -> &FeeScheme {
        &self.scheme_b
    }

    /// Quote any raw amount (`f64`, `Decimal`, `&str`).
    /// Negative, non-numeric and non-finite inputs fail with `FeeError::InvalidAmount`.
    pub fn quote<T>(&self, amount: T) -> Result<FeeQuote, FeeError>
    where
        T: TryInto<Amount, Error = AmountError>,
    {
        let amount = amount.try_into()?;
        self.quote_amount(&amount)
    }

    pub fn quote_amount(&self, amount: &Amount) -> Result<FeeQuote, FeeError> {
        let scheme_a_fee = self.scheme_a.fee(amount)?;
        let scheme_b_fee = self.scheme_b.fee(amount)?;
        let difference = match scheme_b_fee.checked_sub(scheme_a_fee) {
            Some(diff) => diff,
            None => Err(AmountError::Overflow)?,
        };

        Ok(FeeQuote {
            scheme_a_fee,
            scheme_b_fee,
            difference,
            percentage_a: percentage_of(scheme_a_fee, amount)?,
            percentage_b: percentage_of(scheme_b_fee, amount)?,
        })
    }
}

// fee / amount * 100, undefined (None) for a zero amount
fn percentage_of(fee: Decimal, amount: &Amount) -> Result<Option<Decimal>, AmountError> {
    if amount.is_zero() {
        return Ok(None);
    }
    fee.checked_div(amount.value())
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .map(Some)
        .ok_or(AmountError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::{FeeCalculator, FeeError};
    use crate::engine::amount::AmountError;
    use crate::engine::scheme::FeeScheme;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_that_quote_matches_reference_scenario() {
        let quote = FeeCalculator::new().quote(100000.0).unwrap();
        assert_eq!(quote.scheme_a_fee, dec!(4490.0));
        assert_eq!(quote.scheme_b_fee, dec!(6050.0));
        assert_eq!(quote.difference, dec!(1560.0));
        assert_eq!(quote.percentage_a, Some(dec!(4.49)));
        assert_eq!(quote.percentage_b, Some(dec!(6.05)));
        assert!(quote.scheme_a_is_cheaper());
    }

    #[test]
    fn test_that_difference_is_exactly_b_minus_a() {
        let calculator = FeeCalculator::new();
        for raw in ["0", "0.01", "1", "777.77", "50000", "123456789.1234"] {
            let quote = calculator.quote(raw).unwrap();
            assert_eq!(quote.difference, quote.scheme_b_fee - quote.scheme_a_fee);
        }
    }

    #[test]
    fn test_that_percentage_is_fee_over_amount() {
        let calculator = FeeCalculator::new();
        let tolerance = dec!(0.000000001);
        for amount in [dec!(0.5), dec!(13), dec!(4321.99), dec!(10000000)] {
            let quote = calculator.quote(amount).unwrap();
            let expected_a = quote.scheme_a_fee / amount * dec!(100);
            let expected_b = quote.scheme_b_fee / amount * dec!(100);
            assert!((quote.percentage_a.unwrap() - expected_a).abs() < tolerance);
            assert!((quote.percentage_b.unwrap() - expected_b).abs() < tolerance);
        }
    }

    #[test]
    fn test_that_invalid_amounts_are_rejected() {
        let calculator = FeeCalculator::new();

        let quote = calculator.quote(-1.0);
        assert!(matches!(
            quote,
            Err(FeeError::InvalidAmount(AmountError::Negative(_)))
        ));

        let quote = calculator.quote(f64::NAN);
        assert!(matches!(
            quote,
            Err(FeeError::InvalidAmount(AmountError::NonFinite(_)))
        ));

        let quote = calculator.quote(f64::INFINITY);
        assert!(matches!(
            quote,
            Err(FeeError::InvalidAmount(AmountError::NonFinite(_)))
        ));

        let quote = calculator.quote("abc");
        assert!(matches!(
            quote,
            Err(FeeError::InvalidAmount(AmountError::Parse(_)))
        ));
    }

    #[test]
    fn test_that_zero_amount_yields_sentinel_percentages() {
        let quote = FeeCalculator::new().quote(0.0).unwrap();
        assert_eq!(quote.scheme_a_fee, dec!(500));
        assert_eq!(quote.scheme_b_fee, dec!(700));
        assert_eq!(quote.difference, dec!(200));
        assert_eq!(quote.percentage_a, None);
        assert_eq!(quote.percentage_b, None);
    }

    #[test]
    fn test_that_custom_schemes_are_used() {
        let calculator = FeeCalculator::with_schemes(
            FeeScheme::new("Flat", vec![], dec!(1000)),
            FeeScheme::new("Percent", vec![dec!(0.01)], Decimal::ZERO),
        );
        let quote = calculator.quote(dec!(200000)).unwrap();
        assert_eq!(quote.scheme_a_fee, dec!(1000));
        assert_eq!(quote.scheme_b_fee, dec!(2000));
        assert_eq!(quote.difference, dec!(1000));
        assert_eq!(calculator.scheme_a().name(), "Flat");
    }
}
