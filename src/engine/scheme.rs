use crate::engine::amount::{Amount, AmountError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A payment-processing fee schedule: a sum of proportional rate terms
/// plus a fixed charge per transaction.
///
/// The rate terms are kept individually (e.g. interchange, network, risk,
/// gateway) so the formula can be audited term by term. Decimal
/// multiplication is exact, so summing per term gives the same value as
/// multiplying by the combined rate.
#[derive(Debug, Clone, PartialEq)]
pub struct FeeScheme {
    name: String,
    rate_terms: Vec<Decimal>,
    fixed_fee: Decimal,
}

impl FeeScheme {
    pub fn new(name: impl Into<String>, rate_terms: Vec<Decimal>, fixed_fee: Decimal) -> Self {
        FeeScheme {
            name: name.into(),
            rate_terms,
            fixed_fee,
        }
    }

    /// 3.99% + 500 per transaction.
    pub fn scheme_a() -> Self {
        FeeScheme::new("Scheme A", vec![dec!(0.0399)], dec!(500))
    }

    /// 3.15% + 0.20% + 0.50% + 1.50% + 700 per transaction.
    pub fn scheme_b() -> Self {
        FeeScheme::new(
            "Scheme B",
            vec![dec!(0.0315), dec!(0.0020), dec!(0.0050), dec!(0.0150)],
            dec!(700),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rate_terms(&self) -> &[Decimal] {
        &self.rate_terms
    }

    pub fn fixed_fee(&self) -> Decimal {
        self.fixed_fee
    }

    pub fn combined_rate(&self) -> Decimal {
        self.rate_terms.iter().sum()
    }

    pub fn fee(&self, amount: &Amount) -> Result<Decimal, AmountError> {
        let value = amount.value();
        let mut total = self.fixed_fee;
        for rate in &self.rate_terms {
            let term = match value.checked_mul(*rate) {
                Some(term) => term,
                None => Err(AmountError::Overflow)?,
            };
            total = match total.checked_add(term) {
                Some(total) => total,
                None => Err(AmountError::Overflow)?,
            };
        }
        Ok(total)
    }
}
