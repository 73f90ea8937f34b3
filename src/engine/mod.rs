mod amount;
mod calculator;
mod enricher;
mod quote;
mod quote_snapshot;
mod scheme;
mod transaction;

pub use amount::{Amount, AmountError};
pub use calculator::{FeeCalculator, FeeError};
pub use enricher::{
    Enrichment, TransactionEnricher, branches, filter_by, filter_by_branches, total_savings,
};
pub use quote::FeeQuote;
pub use quote_snapshot::QuoteSnapshot;
pub use scheme::FeeScheme;
pub use transaction::{EnrichedTransaction, Transaction};
