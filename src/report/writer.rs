use crate::engine::{EnrichedTransaction, FeeCalculator, FeeQuote, QuoteSnapshot};
use crate::report::format::{CurrencyFormat, format_currency, format_plain};
use std::io::Write;

pub const DERIVED_COLUMNS: [&str; 5] = [
    "scheme_a_fee",
    "scheme_b_fee",
    "difference",
    "percentage_a",
    "percentage_b",
];

const CSV_PLACES: u32 = 2;

/// Write enriched records as CSV: passthrough columns first, in source
/// order, then the derived fee columns. An undefined percentage is an empty cell.
pub fn write_report<'a, W, I>(writer: W, headers: &[String], records: I) -> csv::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a EnrichedTransaction>,
{
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(
        headers
            .iter()
            .map(String::as_str)
            .chain(DERIVED_COLUMNS.iter().copied()),
    )?;

    log::debug!("Starting report serialisation");
    for record in records {
        let quote = &record.quote;
        let derived = [
            format_plain(quote.scheme_a_fee, CSV_PLACES),
            format_plain(quote.scheme_b_fee, CSV_PLACES),
            format_plain(quote.difference, CSV_PLACES),
            quote
                .percentage_a
                .map(|p| format_plain(p, CSV_PLACES))
                .unwrap_or_default(),
            quote
                .percentage_b
                .map(|p| format_plain(p, CSV_PLACES))
                .unwrap_or_default(),
        ];
        let passthrough = record.transaction.fields.iter().map(|(_, v)| v.as_str());
        wtr.write_record(passthrough.chain(derived.iter().map(String::as_str)))?;
    }

    log::debug!("Report serialisation done -> Flushing");
    wtr.flush()?;

    Ok(())
}

/// Rows of the simulator table: both schemes and the savings line.
pub fn simulation_snapshots(
    calculator: &FeeCalculator,
    quote: &FeeQuote,
    format: &CurrencyFormat,
) -> Vec<QuoteSnapshot> {
    vec![
        QuoteSnapshot {
            scheme: calculator.scheme_a().name().to_string(),
            fee: format_currency(quote.scheme_a_fee, format),
        },
        QuoteSnapshot {
            scheme: calculator.scheme_b().name().to_string(),
            fee: format_currency(quote.scheme_b_fee, format),
        },
        QuoteSnapshot {
            scheme: "Savings".to_string(),
            fee: format_currency(quote.difference, format),
        },
    ]
}

pub fn write_simulation<W: Write>(
    writer: W,
    calculator: &FeeCalculator,
    quote: &FeeQuote,
    format: &CurrencyFormat,
) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    for snapshot in simulation_snapshots(calculator, quote, format) {
        log::debug!("Serialising quote snapshot: {snapshot:?}");
        wtr.serialize(snapshot)?;
    }
    wtr.flush()?;

    Ok(())
}
