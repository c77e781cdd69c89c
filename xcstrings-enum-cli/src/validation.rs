use std::path::Path;

use xcstrings_enum::is_identifier;

/// Validation context for a generate run
#[derive(Debug, Default)]
pub struct ValidationContext {
    pub input_file: Option<String>,
    pub output_file: Option<String>,
    pub enum_name: Option<String>,
    pub enum_typealias: Option<String>,
}

impl ValidationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input_file(mut self, file: String) -> Self {
        self.input_file = Some(file);
        self
    }

    pub fn with_output_file(mut self, file: String) -> Self {
        self.output_file = Some(file);
        self
    }

    pub fn with_enum_name(mut self, name: String) -> Self {
        self.enum_name = Some(name);
        self
    }

    pub fn with_enum_typealias(mut self, alias: String) -> Self {
        self.enum_typealias = Some(alias);
        self
    }
}

/// Validate file path exists and is readable
pub fn validate_file_path(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        return Err(format!("File does not exist: {}", path));
    }

    if !path_obj.is_file() {
        return Err(format!("Path is not a file: {}", path));
    }

    Ok(())
}

/// Validate the catalog has an extension we can read
pub fn validate_catalog_extension(path: &str) -> Result<(), String> {
    let ext = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "xcstrings" | "json" => Ok(()),
        _ => Err(format!(
            "Unsupported catalog extension: `{}`. Expected: xcstrings, json",
            ext
        )),
    }
}

/// Validate output path is not a directory
pub fn validate_output_path(path: &str) -> Result<(), String> {
    if path.trim().is_empty() {
        return Err("Output path cannot be empty".to_string());
    }
    if Path::new(path).is_dir() {
        return Err(format!("Output path is a directory: {}", path));
    }
    Ok(())
}

/// Validate a Swift type name (enum name or typealias)
pub fn validate_type_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Type name cannot be empty".to_string());
    }
    if !is_identifier(name) {
        return Err(format!(
            "Invalid type name: {}. Expected letters, digits and underscores, not starting with a digit",
            name
        ));
    }
    Ok(())
}

/// Validate a complete validation context
pub fn validate_context(context: &ValidationContext) -> Result<(), String> {
    if let Some(ref input) = context.input_file {
        validate_file_path(input).map_err(|e| format!("Input validation failed: {}", e))?;
        validate_catalog_extension(input)
            .map_err(|e| format!("Input validation failed: {}", e))?;
    }

    if let Some(ref output) = context.output_file {
        validate_output_path(output).map_err(|e| format!("Output validation failed: {}", e))?;
    }

    if let Some(ref name) = context.enum_name {
        validate_type_name(name).map_err(|e| format!("Enum name validation failed: {}", e))?;
    }

    if let Some(ref alias) = context.enum_typealias {
        validate_type_name(alias)
            .map_err(|e| format!("Enum typealias validation failed: {}", e))?;
    }

    Ok(())
}
