//! Export writers for a completed response record.
//!
//! CSV is the primary boundary: one UTF-8 row with a byte-order mark so
//! common spreadsheet tools pick up the encoding. JSON and a colored
//! terminal view share the same trait so the commands layer stays format
//! agnostic.

use std::borrow::Cow;
use std::io::Write;

use colored::*;

use crate::record::{FieldValue, ResponseRecord};

/// Byte-order mark prepended to CSV output for spreadsheet compatibility.
pub const UTF8_BOM: &str = "\u{FEFF}";

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    serde::Serialize,
    serde::Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_record(&mut self, record: &ResponseRecord) -> anyhow::Result<()>;
}

/// File name the reference tool derives for a respondent: the name plus a
/// fixed suffix. An empty name yields `_emotion_survey.csv` unchanged.
pub fn export_file_name(name: &str) -> String {
    format!("{name}_emotion_survey.csv")
}

pub struct CsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_record(&mut self, record: &ResponseRecord) -> anyhow::Result<()> {
        self.writer.write_all(UTF8_BOM.as_bytes())?;
        let header: Vec<Cow<str>> = record.header().map(csv_escape).collect();
        writeln!(self.writer, "{}", header.join(","))?;
        let row: Vec<String> = record
            .fields()
            .iter()
            .map(|(_, value)| csv_escape(&value.to_string()).into_owned())
            .collect();
        writeln!(self.writer, "{}", row.join(","))?;
        Ok(())
    }
}

/// Quote a CSV field when it contains a delimiter, quote, or line break;
/// embedded quotes are doubled.
fn csv_escape(field: &str) -> Cow<str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_record(&mut self, record: &ResponseRecord) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(record)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

/// Human-readable summary, mirroring what the reference survey shows on
/// screen after submission.
pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for TerminalWriter {
    fn write_record(&mut self, record: &ResponseRecord) -> anyhow::Result<()> {
        println!("{}", "Survey Result".bold().blue());
        println!("{}", "=============".blue());

        for (name, value) in record.fields() {
            if name.ends_with("_rank") {
                continue;
            }
            let rendered = value.to_string();
            if name == "emotion_type" {
                println!("  {name}: {}", rendered.green().bold());
            } else {
                println!("  {name}: {rendered}");
            }
        }

        println!();
        println!("{}", "Color ranking (most positive first):".bold());
        let mut ranked: Vec<(&str, i64)> = record
            .fields()
            .iter()
            .filter_map(|(name, value)| {
                let color = name.strip_suffix("_rank")?;
                match value {
                    FieldValue::Int(rank) => Some((color, *rank)),
                    _ => None,
                }
            })
            .collect();
        ranked.sort_by_key(|(_, rank)| *rank);
        for (color, rank) in ranked {
            println!("  {rank:>2}. {color}");
        }

        Ok(())
    }
}

/// Stdout writer for the requested format.
pub fn create_writer(format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Csv => Box::new(CsvWriter::new(std::io::stdout())),
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_leaves_plain_fields_alone() {
        assert_eq!(csv_escape("stable"), "stable");
        assert_eq!(csv_escape(""), "");
    }

    #[test]
    fn escape_quotes_delimiters_and_quotes() {
        assert_eq!(csv_escape("a,b"), "\"a,b\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_escape("line\nbreak"), "\"line\nbreak\"");
    }

    #[test]
    fn file_name_matches_reference_shape() {
        assert_eq!(export_file_name("Jihu"), "Jihu_emotion_survey.csv");
        assert_eq!(export_file_name(""), "_emotion_survey.csv");
    }
}
