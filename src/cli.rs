use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::LabelLanguage;
use crate::io::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "emopalette")]
#[command(about = "Emotion experience type and color preference survey", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify an emotion experience type from four Likert ratings
    Classify {
        /// Three clarity ratings (1-5), comma-separated
        #[arg(long, value_delimiter = ',', num_args = 3, required = true)]
        clarity: Vec<u8>,

        /// Intensity rating (1-5)
        #[arg(long)]
        intensity: u8,

        /// Print the result as JSON instead of a summary
        #[arg(long)]
        json: bool,

        /// Label language
        #[arg(long, value_enum, default_value = "en")]
        language: LabelLanguage,
    },

    /// Validate a submitted response file and export it as one tabular row
    Export {
        /// Path to the submission JSON file
        input: PathBuf,

        /// Output file (defaults to "<name>_emotion_survey.csv")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
