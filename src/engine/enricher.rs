use crate::engine::calculator::{FeeCalculator, FeeError};
use crate::engine::transaction::{EnrichedTransaction, Transaction};
use rust_decimal::Decimal;

/// Result of a batch enrichment: every record that could be quoted, plus
/// the index and cause of every record that could not.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Enrichment {
    pub enriched: Vec<EnrichedTransaction>,
    pub errors: Vec<(usize, FeeError)>,
}

impl Enrichment {
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_parts(self) -> (Vec<EnrichedTransaction>, Vec<(usize, FeeError)>) {
        (self.enriched, self.errors)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TransactionEnricher {
    calculator: FeeCalculator,
}

impl TransactionEnricher {
    pub fn new() -> Self {
        TransactionEnricher {
            calculator: FeeCalculator::new(),
        }
    }

    pub fn with_calculator(calculator: FeeCalculator) -> Self {
        TransactionEnricher { calculator }
    }

    pub fn calculator(&self) -> &FeeCalculator {
        &self.calculator
    }

    /// Quote every transaction. A record that fails is reported with its
    /// index and skipped; the rest of the batch is still processed.
    pub fn enrich(&self, transactions: &[Transaction]) -> Enrichment {
        let mut enrichment = Enrichment::default();

        log::debug!("Started enriching {} transactions", transactions.len());
        for (index, tx) in transactions.iter().enumerate() {
            match self.calculator.quote(tx.amount) {
                Ok(quote) => enrichment.enriched.push(EnrichedTransaction {
                    transaction: tx.clone(),
                    quote,
                }),
                Err(e) => {
                    log::warn!(
                        "Error enriching transaction index={} branch={}: {}",
                        index,
                        tx.branch,
                        e
                    );
                    enrichment.errors.push((index, e));
                }
            }
        }
        log::debug!(
            "Enrichment done: {} enriched, {} failed",
            enrichment.enriched.len(),
            enrichment.errors.len()
        );

        enrichment
    }
}

/// Records matching `predicate`, in their original order.
pub fn filter_by<'a, P>(
    records: &'a [EnrichedTransaction],
    mut predicate: P,
) -> Vec<&'a EnrichedTransaction>
where
    P: FnMut(&EnrichedTransaction) -> bool,
{
    records.iter().filter(|&record| predicate(record)).collect()
}

/// Records whose branch is one of `branches`. An empty selection keeps everything.
pub fn filter_by_branches<'a, S: AsRef<str>>(
    records: &'a [EnrichedTransaction],
    branches: &[S],
) -> Vec<&'a EnrichedTransaction> {
    if branches.is_empty() {
        return records.iter().collect();
    }
    filter_by(records, |record| {
        branches.iter().any(|b| b.as_ref() == record.branch())
    })
}

/// Distinct branch labels in first-seen order.
pub fn branches(records: &[EnrichedTransaction]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for record in records {
        if !seen.contains(&record.branch()) {
            seen.push(record.branch());
        }
    }
    seen
}

/// Sum of `difference` over the given records; zero when empty.
pub fn total_savings<'a, I>(records: I) -> Decimal
where
    I: IntoIterator<Item = &'a EnrichedTransaction>,
{
    records.into_iter().map(|record| record.quote.difference).sum()
}
