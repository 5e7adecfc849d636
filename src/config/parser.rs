use std::path::Path;
use crate::errors::CheckerError;
use super::types::CheckerConfig;
use super::schema::CONFIG_SCHEMA;
use tracing::{debug, warn};

const MAX_CONFIG_BYTES: u64 = 1_048_576;

pub async fn parse_config(path: &Path) -> Result<CheckerConfig, CheckerError> {
    if !path.exists() {
        return Err(CheckerError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(CheckerError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let config = parse_config_str(&content)?;
    debug!(path = %path.display(), ?config, "Loaded configuration");
    Ok(config)
}

/// Parses YAML text into a validated config. Empty text yields the defaults.
pub fn parse_config_str(content: &str) -> Result<CheckerConfig, CheckerError> {
    if content.trim().is_empty() {
        return Ok(CheckerConfig::default());
    }

    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;

    // JSON Schema validation
    validate_schema(&yaml)?;

    // Parse into typed config
    let config: CheckerConfig = serde_yaml::from_value(yaml)?;

    // Semantic checks
    validate_limits(&config)?;

    Ok(config)
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), CheckerError> {
    // Convert YAML value to JSON for schema validation
    let json_value: serde_json::Value = serde_json::to_value(yaml)
        .map_err(|e| CheckerError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| CheckerError::Config(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        // Advisory only; serde decides what actually parses.
        for e in errors {
            warn!(validation_error = %e, path = %e.instance_path, "Config schema warning");
        }
    }

    Ok(())
}

fn validate_limits(config: &CheckerConfig) -> Result<(), CheckerError> {
    if config.limits.max_document_chars == Some(0) {
        return Err(CheckerError::Config(
            "limits.max_document_chars must be greater than zero".into(),
        ));
    }
    Ok(())
}
