use crate::engine::{AmountError, Transaction};
use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;
use std::env;
use std::io::Read;
use std::str::FromStr;
use thiserror::Error;

pub const AMOUNT_COLUMN_VAR: &str = "FEE_AMOUNT_COLUMN";
pub const BRANCH_COLUMN_VAR: &str = "FEE_BRANCH_COLUMN";
pub const DROP_COLUMNS_VAR: &str = "FEE_DROP_COLUMNS";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Maps source columns onto the fields the engine needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    pub amount_column: String,
    pub branch_column: String,
    pub drop_columns: Vec<String>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        LoaderConfig {
            amount_column: "amount".to_string(),
            branch_column: "branch".to_string(),
            drop_columns: Vec::new(),
        }
    }
}

impl LoaderConfig {
    /// Defaults overridden by `FEE_AMOUNT_COLUMN`, `FEE_BRANCH_COLUMN` and
    /// `FEE_DROP_COLUMNS` (comma separated).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = LoaderConfig::default();
        if let Some(column) = lookup(AMOUNT_COLUMN_VAR).filter(|c| !c.trim().is_empty()) {
            config.amount_column = column.trim().to_string();
        }
        if let Some(column) = lookup(BRANCH_COLUMN_VAR).filter(|c| !c.trim().is_empty()) {
            config.branch_column = column.trim().to_string();
        }
        if let Some(columns) = lookup(DROP_COLUMNS_VAR) {
            config.drop_columns = columns
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(String::from)
                .collect();
        }
        config
    }

    fn is_dropped(&self, column: &str) -> bool {
        self.drop_columns
            .iter()
            .any(|dropped| dropped.eq_ignore_ascii_case(column))
    }
}

/// Transactions read from a source, with the kept headers in source order
/// and the rows that could not be coerced.
#[derive(Debug, Clone, Default)]
pub struct Loaded {
    pub headers: Vec<String>,
    pub transactions: Vec<Transaction>,
    pub skipped: Vec<(usize, String)>,
}

/// Strip currency decorations ("$", thousands ",", a trailing code like "COP")
/// and parse straight into a `Decimal`. The sign is kept: negative amounts
/// are rejected per record by the enricher, not here.
pub fn clean_amount(raw: &str) -> Result<Decimal, AmountError> {
    let cleaned: String = raw
        .trim()
        .trim_end_matches(|c: char| c.is_ascii_alphabetic())
        .chars()
        .filter(|c| *c != '$' && *c != ',' && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        Err(AmountError::Parse(raw.trim().into()))?
    }
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .map_err(|_| AmountError::Parse(raw.trim().into()))
}

pub fn load_transactions<R: Read>(reader: R, config: &LoaderConfig) -> Result<Loaded, LoadError> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let source_headers = rdr.headers()?.clone();
    let amount_idx = find_column(&source_headers, &config.amount_column)?;
    let branch_idx = find_column(&source_headers, &config.branch_column)?;
    let kept: Vec<usize> = (0..source_headers.len())
        .filter(|idx| !config.is_dropped(&source_headers[*idx]))
        .collect();
    log::debug!("Columns: amount={amount_idx} branch={branch_idx} kept={kept:?}");

    let mut loaded = Loaded {
        headers: kept.iter().map(|idx| source_headers[*idx].to_string()).collect(),
        ..Loaded::default()
    };

    log::debug!("Started reading records");
    for (row, result) in rdr.records().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Error reading record row={row}: {e}");
                loaded.skipped.push((row, e.to_string()));
                continue;
            }
        };

        let raw_amount = record.get(amount_idx).unwrap_or_default();
        let amount = match clean_amount(raw_amount) {
            Ok(a) => a,
            Err(e) => {
                log::warn!("Skipping record row={row}: {e}");
                loaded.skipped.push((row, e.to_string()));
                continue;
            }
        };

        let fields = kept
            .iter()
            .map(|idx| {
                (
                    source_headers[*idx].to_string(),
                    record.get(*idx).unwrap_or_default().to_string(),
                )
            })
            .collect();

        loaded.transactions.push(Transaction {
            amount,
            branch: record.get(branch_idx).unwrap_or_default().to_string(),
            fields,
        });
    }
    log::debug!(
        "Read {} transactions, skipped {}",
        loaded.transactions.len(),
        loaded.skipped.len()
    );

    Ok(loaded)
}

fn find_column(headers: &StringRecord, name: &str) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
}
