//! Check command - report which rows fail to coerce.

use colored::Colorize;

use crate::cli::InputArgs;

pub fn run(input: InputArgs, json_output: bool, _verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let parser = super::load_parser(&input)?;
    let report = parser.parse_file_lenient(&input.file)?;

    if json_output {
        let failures: Vec<_> = report
            .failures
            .iter()
            .map(|f| {
                serde_json::json!({
                    "row": f.row + 1,
                    "error": f.error.to_string(),
                })
            })
            .collect();
        let status = serde_json::json!({
            "file": input.file.display().to_string(),
            "total_rows": report.total_rows(),
            "ok": report.records.len(),
            "failed": report.failures.len(),
            "failures": failures,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!(
            "{} {}",
            "Schema check for".cyan().bold(),
            input.file.display().to_string().white()
        );
        println!();
        println!(
            "Rows: {} ok, {} failed, {} total",
            report.records.len().to_string().green().bold(),
            report.failures.len().to_string().red().bold(),
            report.total_rows()
        );

        if !report.failures.is_empty() {
            println!();
            for failure in &report.failures {
                println!("  {} {}", format!("row {}:", failure.row + 1).yellow(), failure.error);
            }
        }
    }

    if report.is_clean() {
        Ok(())
    } else {
        Err(format!("{} row(s) failed to coerce", report.failures.len()).into())
    }
}
