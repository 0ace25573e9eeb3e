// Export modules for library usage
pub mod classify;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod input;
pub mod io;
pub mod ranking;
pub mod record;

// Re-export commonly used types
pub use crate::classify::{classify, classify_raw};
pub use crate::core::{
    Classification, EmotionType, FollowupAnswers, Identity, LabelLanguage, Rating, RatingSet,
    Sign, SurveyResponse, YesNo,
};
pub use crate::errors::SurveyError;
pub use crate::input::{load_submission, RawSubmission};
pub use crate::io::output::{
    create_writer, export_file_name, CsvWriter, JsonWriter, OutputFormat, OutputWriter,
    TerminalWriter, UTF8_BOM,
};
pub use crate::ranking::{Color, RankMapping};
pub use crate::record::{assemble, FieldValue, ResponseRecord};
