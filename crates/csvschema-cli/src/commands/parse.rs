//! Parse command - coerce a data file and emit typed records.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use colored::Colorize;
use csvschema::Record;

use crate::cli::{InputArgs, OutputFormat};

pub fn run(
    input: InputArgs,
    lenient: bool,
    format: OutputFormat,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let parser = super::load_parser(&input)?;

    let records = if lenient {
        let report = parser.parse_file_lenient(&input.file)?;
        for failure in &report.failures {
            eprintln!(
                "{} row {}: {}",
                "Skipped".yellow().bold(),
                failure.row + 1,
                failure.error
            );
        }
        report.records
    } else {
        parser.parse_file(&input.file)?
    };

    match &output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_records(&mut writer, &records, &format)?;
            writer.flush()?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            write_records(&mut writer, &records, &format)?;
            writer.flush()?;
        }
    }

    if verbose {
        eprintln!(
            "{} {} records from {}",
            "Parsed".green().bold(),
            records.len().to_string().white().bold(),
            input.file.display()
        );
        if let Some(path) = &output {
            eprintln!("Output: {}", path.display());
        }
    }

    Ok(())
}

/// Serialize records in the requested format.
fn write_records<W: Write>(
    writer: &mut W,
    records: &[Record],
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, records)?;
            writeln!(writer)?;
        }
        OutputFormat::Jsonl => {
            for record in records {
                serde_json::to_writer(&mut *writer, record)?;
                writeln!(writer)?;
            }
        }
    }
    Ok(())
}
