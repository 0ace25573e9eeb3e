use std::fs::File;
use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use log::info;

use crate::classify::classify;
use crate::config::SurveyConfig;
use crate::input::load_submission;
use crate::io::output::{
    create_writer, export_file_name, CsvWriter, JsonWriter, OutputFormat, OutputWriter,
};
use crate::record::assemble;

#[derive(Debug, Clone)]
pub struct ExportArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub config: Option<PathBuf>,
}

pub fn handle_export(args: ExportArgs) -> Result<()> {
    let config = SurveyConfig::load(args.config.as_deref())?;
    let format = args.format.unwrap_or(config.output.default_format);

    let response = load_submission(&args.input)?;
    info!(
        "loaded submission for '{}' from {}",
        response.identity.name,
        args.input.display()
    );

    let classification = classify(&response.ratings);
    let record = assemble(
        &response.identity,
        &classification,
        &response.ranks,
        &response.followup,
        Local::now(),
        config.labels.language,
    );

    match format {
        OutputFormat::Terminal => create_writer(format).write_record(&record)?,
        OutputFormat::Csv | OutputFormat::Json => {
            let path = resolve_output_path(&args, &config, format, &response.identity.name);
            let file = File::create(&path)?;
            match format {
                OutputFormat::Csv => CsvWriter::new(file).write_record(&record)?,
                OutputFormat::Json => JsonWriter::new(file).write_record(&record)?,
                OutputFormat::Terminal => unreachable!(),
            }
            info!("wrote export to {}", path.display());
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}

fn resolve_output_path(
    args: &ExportArgs,
    config: &SurveyConfig,
    format: OutputFormat,
    name: &str,
) -> PathBuf {
    if let Some(output) = &args.output {
        return output.clone();
    }
    let mut file_name = export_file_name(name);
    if format == OutputFormat::Json {
        file_name = file_name.replace(".csv", ".json");
    }
    match &config.output.directory {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}
