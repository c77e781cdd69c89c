use xcstrings_enum::{CaseEntry, Generator, Output, generator::table_name_for, write_output};

use crate::{
    options::{OutputTarget, Settings},
    validation::{ValidationContext, validate_context},
};

/// Runs one generation and returns the process exit code.
pub fn run_generate_command(settings: &Settings) -> i32 {
    match generate(settings) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("❌ {}", e);
            1
        }
    }
}

fn generate(settings: &Settings) -> Result<(), String> {
    let mut context = ValidationContext::new()
        .with_input_file(settings.xcstrings_path.clone())
        .with_enum_name(settings.enum_name.clone());
    if let OutputTarget::File(path) = &settings.output {
        context = context.with_output_file(path.clone());
    }
    if let Some(alias) = &settings.enum_typealias {
        context = context.with_enum_typealias(alias.clone());
    }
    validate_context(&context)?;

    let generator = settings
        .generator()
        .map_err(|e| format!("Invalid configuration: {}", e))?;

    // Keep stdout clean for the generated source when it goes there.
    let to_stdout = settings.output == OutputTarget::Stdout;
    let status = |line: String| {
        if to_stdout {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    };

    status(format!("LOADING: {}", settings.xcstrings_path));
    let catalog = Generator::read_catalog(&settings.xcstrings_path)
        .map_err(|e| format!("Failed to read {}: {}", settings.xcstrings_path, e))?;

    let output = generator
        .generate_output(&catalog, table_name_for(&settings.xcstrings_path).as_deref())
        .map_err(|e| format!("Generation failed: {}", e))?;

    if settings.verbose {
        for line in describe_changes(&output) {
            status(line);
        }
    }

    match &settings.output {
        OutputTarget::Stdout => print!("{}", output.text),
        OutputTarget::File(path) => {
            write_output(path, &output.text)
                .map_err(|e| format!("Failed to write {}: {}", path, e))?;
            status(format!("Written to: {}", path));
        }
    }

    let report = output.report();
    status(format!(
        "✅ {} cases ({} verbatim, {} renamed, {} escaped, {} suffixed)",
        report.total, report.verbatim, report.renamed, report.escaped, report.suffixed
    ));
    Ok(())
}

/// One line per case whose declaration differs from its key.
pub fn describe_changes(output: &Output) -> Vec<String> {
    output
        .group
        .iter()
        .filter(|entry| entry.needs_raw_value())
        .map(describe_entry)
        .collect()
}

fn describe_entry(entry: &CaseEntry) -> String {
    let mut notes = Vec::new();
    if entry.escaped {
        notes.push("reserved word".to_string());
    }
    if let Some(n) = entry.collision_suffix {
        notes.push(format!("collision suffix {}", n));
    }
    let mut line = format!(
        "  {:?} -> {}",
        entry.key,
        entry.identifier.declaration()
    );
    if !notes.is_empty() {
        line.push_str(&format!(" ({})", notes.join(", ")));
    }
    line
}
