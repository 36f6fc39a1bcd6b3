use clap::{Parser, Subcommand};

/// Extended help shown after `billtrace process --help`: the input schema
/// and what the run produces.
pub const PROCESS_AFTER_HELP: &str = "\
How processing works:
  Billtrace reads one delimited transaction export, detects recurring
  series, and writes one enriched file. Nothing is persisted between runs.

Input schema (header row required, column order free):
  externalId,createdAt,type,amount,date,description,category,counterParty,tag,accountExternalId,location

  externalId         Upstream transaction id, passed through.
  createdAt          Clock string `HH:MM` or `HH:MM.S` (seconds suffix).
                     Unparseable values fall back to the processing time.
  type               Transaction kind (e.g. DEBIT/CREDIT), passed through.
  amount             Decimal number. Non-numeric values abort the run.
  date               Occurrence date, exactly `DD/MM/YYYY`. Malformed
                     dates abort the run.
  description        Free text; part of the series key.
  category           Label; part of the series key.
  counterParty       Passed through.
  tag                Passed through.
  accountExternalId  Passed through.
  location           Optional; may be omitted entirely.

Output columns (fixed order):
  id,created_at,external_id,type,amount,date,description,category,
  counter_party,recurring,tag,account_external_id,location,
  predicted_next_payment

  id                      Fresh v4 UUID per row.
  created_at              ISO 8601 local date-time, second precision.
  date                    ISO calendar date (YYYY-MM-DD).
  recurring               Literal `true` or `false`.
  predicted_next_payment  ISO date for recurring rows, otherwise empty.
";

#[derive(Debug, Parser)]
#[command(
    name = "billtrace",
    version,
    about = "transaction enrichment and recurring-payment detection",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Enrich a transaction export and write the processed file
    #[command(after_long_help = PROCESS_AFTER_HELP)]
    Process {
        /// Path to the delimited transaction export
        input: String,
        /// Path the enriched file is written to
        output: String,
        /// Emit structured JSON output for machine parsing
        #[arg(long)]
        json: bool,
    },
    /// Preview recurring bills detected in a transaction export
    Bills {
        /// Path to the delimited transaction export
        input: String,
        /// Emit structured JSON output for machine parsing
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}
