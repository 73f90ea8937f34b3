use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fees for one amount under both schemes.
/// `difference` is `scheme_b_fee - scheme_a_fee`: positive when Scheme A is cheaper.
/// Percentages are `None` when the amount is zero.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeQuote {
    pub scheme_a_fee: Decimal,
    pub scheme_b_fee: Decimal,
    pub difference: Decimal,
    pub percentage_a: Option<Decimal>,
    pub percentage_b: Option<Decimal>,
}

impl FeeQuote {
    pub fn scheme_a_is_cheaper(&self) -> bool {
        self.difference.is_sign_positive() && !self.difference.is_zero()
    }
}
