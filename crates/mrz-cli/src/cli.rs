//! CLI argument definitions for the MRZ encoder.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use mrz_cli::record::RecordOverrides;

#[derive(Parser)]
#[command(
    name = "mrz",
    version,
    about = "Encode ICAO 9303 machine-readable zones",
    long_about = "Encode the machine-readable zone (MRZ) of passports, visas and \
                  identity cards.\n\n\
                  Covers the 2-line 44-character and 3-line 30-character formats \
                  with their check digits."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Reference data JSON (countries, states, visa classes).
    /// Defaults to $MRZ_REFERENCE_DATA, then the bundled data.
    #[arg(long = "reference-data", value_name = "PATH", global = true)]
    pub reference_data: Option<PathBuf>,

    /// Document-type catalog JSON replacing the built-in list.
    #[arg(long = "catalog", value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include names, numbers and dates in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Encode one identity record.
    Encode(EncodeArgs),

    /// List the document types of the catalog.
    DocTypes,

    /// Print the check digit of a string.
    CheckDigit(CheckDigitArgs),

    /// Normalize text into a fixed-width MRZ field.
    Normalize(NormalizeArgs),
}

#[derive(Args)]
pub struct EncodeArgs {
    /// Record JSON (camelCase keys); flags override its values.
    #[arg(long = "record", value_name = "FILE")]
    pub record: Option<PathBuf>,

    /// Document type code (P, VN, ID, ...).
    #[arg(long = "doc-type", value_name = "CODE")]
    pub doc_type: Option<String>,

    /// Document sub-type (visa class or issuing state).
    #[arg(long = "sub-type", value_name = "CODE")]
    pub sub_type: Option<String>,

    #[arg(long = "doc-number")]
    pub doc_number: Option<String>,

    #[arg(long = "last-name")]
    pub last_name: Option<String>,

    #[arg(long = "first-name")]
    pub first_name: Option<String>,

    /// Birth date, YYYY-MM-DD or YYYYMMDD.
    #[arg(long = "birth-date", value_name = "DATE")]
    pub birth_date: Option<String>,

    /// Expiry date, YYYY-MM-DD or YYYYMMDD.
    #[arg(long = "expire-date", value_name = "DATE")]
    pub expire_date: Option<String>,

    #[arg(long = "issue-country", value_name = "CODE")]
    pub issue_country: Option<String>,

    #[arg(long = "nationality", value_name = "CODE")]
    pub nationality: Option<String>,

    #[arg(long = "sex")]
    pub sex: Option<String>,

    #[arg(long = "opt-number")]
    pub opt_number: Option<String>,

    #[arg(long = "extra-number")]
    pub extra_number: Option<String>,

    /// Print markup (`<br>` and `&lt;`) instead of plain text.
    #[arg(long = "markup")]
    pub markup: bool,

    /// Also print the encoded fields and check digits.
    #[arg(long = "show-fields")]
    pub show_fields: bool,

    /// Print the encoded fields and MRZ as JSON.
    #[arg(long = "json", conflicts_with = "show_fields")]
    pub json: bool,
}

impl EncodeArgs {
    pub fn overrides(&self) -> RecordOverrides {
        RecordOverrides {
            doc_type: self.doc_type.clone(),
            doc_sub_type: self.sub_type.clone(),
            doc_number: self.doc_number.clone(),
            last_name: self.last_name.clone(),
            first_name: self.first_name.clone(),
            birth_date: self.birth_date.clone(),
            expire_date: self.expire_date.clone(),
            issue_country: self.issue_country.clone(),
            nationality: self.nationality.clone(),
            sex: self.sex.clone(),
            opt_number: self.opt_number.clone(),
            extra_number: self.extra_number.clone(),
        }
    }
}

#[derive(Args)]
pub struct CheckDigitArgs {
    /// Text in MRZ form (`A-Z`, `0-9`, `<`).
    #[arg(value_name = "TEXT")]
    pub text: String,
}

#[derive(Args)]
pub struct NormalizeArgs {
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Field width.
    #[arg(long = "width", short = 'w', value_name = "N")]
    pub width: usize,

    /// Escape fillers as `&lt;`.
    #[arg(long = "markup")]
    pub markup: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
