use anyhow::{Context, Result, bail};
use fee_compare::engine::{
    Amount, FeeCalculator, TransactionEnricher, branches, filter_by_branches, total_savings,
};
use fee_compare::report::{
    CurrencyFormat, LoaderConfig, format_percentage, load_transactions, savings_summary, write_report,
    write_simulation,
};
use simple_logger::SimpleLogger;
use std::env;
use std::ffi::OsString;
use std::fs::File;
use std::path::PathBuf;

const USAGE: &str = "usage: fee_compare report <file.csv> [branch ...] | fee_compare simulate <amount>";

fn main() -> Result<()> {
    SimpleLogger::new().env().init()?;

    log::debug!("Application started");

    let mut args = env::args_os().skip(1);
    let command = match args.next() {
        None => bail!("expected a command, but got none\n{USAGE}"),
        Some(command) => command,
    };

    match command.to_str() {
        Some("report") => run_report(args.collect())?,
        Some("simulate") => run_simulate(args.collect())?,
        _ => bail!("unknown command {command:?}\n{USAGE}"),
    }

    log::debug!("Application finished");

    Ok(())
}

fn run_report(args: Vec<OsString>) -> Result<()> {
    let mut args = args.into_iter();
    let path = match args.next() {
        None => bail!("expected a CSV path, but got none\n{USAGE}"),
        Some(file_path) => PathBuf::from(file_path),
    };
    let selected: Vec<String> = args.map(|a| a.to_string_lossy().into_owned()).collect();
    log::debug!("Extracted filepath from args: {path:?}, branches: {selected:?}");

    let config = LoaderConfig::from_env();
    log::debug!("Loader config: {config:?}");

    log::debug!("Loading transactions: Starting");
    let file = File::open(&path).with_context(|| format!("cannot open {path:?}"))?;
    let loaded = load_transactions(file, &config)?;
    log::debug!("Loading transactions: Done");

    let enricher = TransactionEnricher::new();
    let enrichment = enricher.enrich(&loaded.transactions);
    if !enrichment.is_complete() {
        log::warn!(
            "{} of {} transactions could not be enriched",
            enrichment.errors.len(),
            loaded.transactions.len()
        );
    }

    let available = branches(&enrichment.enriched);
    log::debug!("Available branches: {available:?}");
    for branch in selected.iter().filter(|b| !available.contains(&b.as_str())) {
        log::warn!("Selected branch {branch:?} has no transactions");
    }

    let records = filter_by_branches(&enrichment.enriched, &selected);

    log::debug!("Exporting report to stdout: Started");
    write_report(std::io::stdout(), &loaded.headers, records.iter().copied())?;
    log::debug!("Exporting report to stdout: Done");

    let calculator = enricher.calculator();
    log::info!(
        "{}",
        savings_summary(
            total_savings(records),
            calculator.scheme_a().name(),
            calculator.scheme_b().name(),
            &CurrencyFormat::default(),
        )
    );

    Ok(())
}

fn run_simulate(args: Vec<OsString>) -> Result<()> {
    let raw = match args.first() {
        None => bail!("expected an amount, but got none\n{USAGE}"),
        Some(raw) => raw.to_string_lossy().into_owned(),
    };

    let amount: Amount = raw
        .parse()
        .with_context(|| format!("cannot simulate fees for {raw:?}"))?;
    log::debug!("Simulating fees for amount {amount}");

    let calculator = FeeCalculator::new();
    let quote = calculator.quote_amount(&amount)?;
    log::debug!("Simulated quote: {quote:?}");
    let (a, b) = (calculator.scheme_a().name(), calculator.scheme_b().name());
    if quote.difference.is_zero() {
        log::info!("{a} and {b} cost the same for {amount}");
    } else if quote.scheme_a_is_cheaper() {
        log::info!("{a} is cheaper than {b} for {amount}");
    } else {
        log::info!("{b} is cheaper than {a} for {amount}");
    }
    log::info!(
        "Effective rates: {} {}, {} {}",
        calculator.scheme_a().name(),
        format_percentage(quote.percentage_a),
        calculator.scheme_b().name(),
        format_percentage(quote.percentage_b)
    );

    write_simulation(std::io::stdout(), &calculator, &quote, &CurrencyFormat::default())?;

    Ok(())
}
