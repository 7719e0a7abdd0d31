use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// epbridge command line tool
#[derive(Parser)]
#[command(name = "epbridge")]
#[command(
    version,
    about = "Translate building energy models into simulation input records",
    long_about = None
)]
pub struct CliCommand {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Translate a model description and print the resulting records
    Translate {
        /// Path to the model description
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Fold each space into its thermal zone instead of writing space records
        #[arg(long)]
        exclude_space_translation: bool,

        /// Print the diagnostics raised before a translation aborts
        #[arg(long)]
        display_partial: bool,

        /// Print the output in debug format
        #[arg(long)]
        print_debug: bool,

        /// Disable colors in the output
        #[arg(long)]
        no_colors: bool,
    },
    /// Development tools for debugging and testing
    Dev {
        #[command(subcommand)]
        command: DevCommands,
    },
}

#[derive(Subcommand)]
pub enum DevCommands {
    /// Print the source model described by a file
    PrintModel {
        /// Path to the model description
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the objects that parsed even if there are syntax errors
        #[arg(long)]
        display_partial: bool,

        /// Print the output in debug format
        #[arg(long)]
        print_debug: bool,

        /// Disable colors in the output
        #[arg(long)]
        no_colors: bool,
    },
}
