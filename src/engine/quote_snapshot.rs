use serde::{Deserialize, Serialize};

/// One display row of a fee simulation: a scheme (or the savings line) and its fee.
/// It is used for decoupling simulator output from FeeQuote and easy serialisation
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct QuoteSnapshot {
    pub scheme: String,
    pub fee: String,
}
