mod format;
mod loader;
mod writer;

pub use format::{CurrencyFormat, format_currency, format_percentage, format_plain, savings_summary};
pub use loader::{LoadError, Loaded, LoaderConfig, clean_amount, load_transactions};
pub use writer::{DERIVED_COLUMNS, simulation_snapshots, write_report, write_simulation};
