//! CLI argument definitions for the NEO explorer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "neo-explorer",
    version,
    about = "Explore near-Earth objects and their close approaches",
    long_about = "Load near-Earth object data from a CSV file and close-approach data\n\
                  from a JSON file, link them by primary designation, and inspect or\n\
                  export the linked model."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the CSV file of near-Earth objects.
    #[arg(
        long = "neo-csv",
        value_name = "PATH",
        default_value = "data/neos.csv",
        global = true
    )]
    pub neo_csv: PathBuf,

    /// Path to the JSON file of close approaches.
    #[arg(
        long = "cad-json",
        value_name = "PATH",
        default_value = "data/cad.json",
        global = true
    )]
    pub cad_json: PathBuf,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Look up one near-Earth object and show its close approaches.
    Inspect(InspectArgs),

    /// Export every close approach together with its linked NEO.
    Export(ExportArgs),
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Primary designation of the NEO to look up.
    #[arg(long = "designation", value_name = "DESIGNATION", group = "key")]
    pub designation: Option<String>,

    /// IAU name of the NEO to look up (e.g. Eros).
    #[arg(long = "name", value_name = "NAME", group = "key", required_unless_present = "designation")]
    pub name: Option<String>,

    /// Also list each attached close approach.
    #[arg(long = "approaches")]
    pub approaches: bool,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Output file; the extension picks the format (.csv or .json).
    #[arg(value_name = "OUTFILE")]
    pub outfile: PathBuf,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
