use crate::types::{CategoryName, ColorChoice, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mjreport")]
#[command(about = "Render generation API responses as readable reports", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Format a JSON response record as a text report")]
    Format {
        #[arg(value_enum, help = "Kind of response the record came from")]
        category: CategoryName,

        #[arg(help = "Input file (reads stdin when omitted or '-')")]
        input: Option<PathBuf>,

        #[arg(long, help = "Read newline-delimited JSON, one record per line")]
        lines: bool,

        #[arg(long, help = "Exit with status 2 when any response reports a failure")]
        strict: bool,
    },

    #[command(about = "List response categories and how each signals failure")]
    Categories,
}
