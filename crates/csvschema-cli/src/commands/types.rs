//! Types command - list registered type names.

use colored::Colorize;
use csvschema::TypeRegistry;
use csvschema::registry::BUILTIN_TYPES;

pub fn run(json_output: bool, _verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let names = TypeRegistry::global().type_names();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }

    println!("{}", "Registered types".cyan().bold());
    for name in &names {
        let usage = match name.as_str() {
            "array" => "array:<delimiter>".to_string(),
            other => other.to_string(),
        };
        if BUILTIN_TYPES.contains(&name.as_str()) {
            println!("  {} {}", usage.white().bold(), "(built-in)".dimmed());
        } else {
            println!("  {}", usage.white().bold());
        }
    }

    Ok(())
}
