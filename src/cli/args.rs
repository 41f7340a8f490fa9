use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Stamp settlement dates onto matched ledger documents
#[derive(Parser, Debug)]
#[command(name = "ledger-settle")]
#[command(about = "Match zero-sum ledger blocks and stamp settlement dates", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing journal rows
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Only process rows strictly after this date
    #[arg(
        long = "cutoff",
        value_name = "DATE",
        value_parser = parse_cutoff_date,
        help = "Drop rows not strictly after this date (DD/MM/YY or YYYY-MM-DD)"
    )]
    pub cutoff: Option<NaiveDate>,

    /// Where to write the augmented table
    #[arg(
        long = "table",
        value_name = "PATH",
        default_value = "resultat.csv",
        help = "Output path for the augmented table (CSV)"
    )]
    pub table_file: PathBuf,

    /// Where to write the settlement extract
    #[arg(
        long = "extract",
        value_name = "PATH",
        default_value = "resultat.txt",
        help = "Output path for the settlement extract (space-separated text)"
    )]
    pub extract_file: PathBuf,
}

/// Parse the cutoff argument
///
/// Accepts the journal's own day/month/two-digit-year format and ISO
/// dates. Operator input is not coerced the way journal data is: an
/// unparsable cutoff is a hard argument error.
fn parse_cutoff_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%d/%m/%y")
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .map_err(|_| format!("invalid cutoff date '{value}': expected DD/MM/YY or YYYY-MM-DD"))
}
