use crate::engine::quote::FeeQuote;
use rust_decimal::Decimal;

/// A raw transaction as handed over by the loader.
/// `fields` keeps every source column, in source order, untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub amount: Decimal,
    pub branch: String,
    pub fields: Vec<(String, String)>,
}

impl Transaction {
    pub fn new(amount: Decimal, branch: impl Into<String>) -> Self {
        Transaction {
            amount,
            branch: branch.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedTransaction {
    pub transaction: Transaction,
    pub quote: FeeQuote,
}

impl EnrichedTransaction {
    pub fn branch(&self) -> &str {
        &self.transaction.branch
    }
}
