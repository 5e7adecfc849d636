use crate::cli::commands::CheckArgs;
use crate::config::{parse_config, CheckerConfig};
use crate::errors::CheckerError;
use crate::models::{Document, ScoreBreakdown};
use crate::scoring::score_breakdown;
use crate::utils::normalize_path;
use std::path::Path;
use tracing::{info, warn};

/// Runs one comparison from command-line arguments.
pub async fn handle_check(args: CheckArgs) -> Result<ScoreBreakdown, CheckerError> {
    let mut config = match &args.config {
        Some(path) => parse_config(path).await?,
        None => CheckerConfig::default(),
    };
    if args.allow_relative {
        config.paths.require_absolute = false;
    }
    if args.breakdown {
        config.output.breakdown = true;
    }

    let breakdown = check_files(&args.original, &args.candidate, &args.output, &config).await?;

    if config.output.breakdown {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    }
    Ok(breakdown)
}

/// Scores `candidate` against `original` and writes the two-decimal result to `output`.
pub async fn check_files(
    original: &Path,
    candidate: &Path,
    output: &Path,
    config: &CheckerConfig,
) -> Result<ScoreBreakdown, CheckerError> {
    if config.paths.require_absolute {
        require_absolute(&[original, candidate, output])?;
    }
    let original = normalize_path(original);
    let candidate = normalize_path(candidate);
    let output = normalize_path(output);

    info!(original = %original.display(), candidate = %candidate.display(), "Comparing documents");

    let original_text = read_document(&original).await?.normalized();
    let candidate_text = read_document(&candidate).await?.normalized();

    if let Some(limit) = config.limits.max_document_chars {
        for (path, len) in [(&original, original_text.len()), (&candidate, candidate_text.len())] {
            if len > limit {
                return Err(CheckerError::ResourceLimit(format!(
                    "{} has {} characters after normalization, limit is {}",
                    path.display(), len, limit
                )));
            }
        }
    }

    let breakdown = score_breakdown(&original_text, &candidate_text);

    write_score(&output, &breakdown.score.to_string(), config.output.create_parent_dirs).await?;
    info!(score = %breakdown.score, output = %output.display(), "Similarity written");

    Ok(breakdown)
}

fn require_absolute(paths: &[&Path]) -> Result<(), CheckerError> {
    let relative: Vec<String> = paths
        .iter()
        .filter(|p| !p.is_absolute())
        .map(|p| p.display().to_string())
        .collect();
    if relative.is_empty() {
        Ok(())
    } else {
        Err(CheckerError::InvalidArguments(format!(
            "all three paths must be absolute, got relative: {}",
            relative.join(", ")
        )))
    }
}

/// Reads a file as UTF-8. Invalid sequences become U+FFFD.
async fn read_document(path: &Path) -> Result<Document, CheckerError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| CheckerError::File(format!("Failed to read {}: {}", path.display(), e)))?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!(path = %path.display(), error = %e.utf8_error(), "Input is not valid UTF-8, replacing bad bytes");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };
    Ok(Document::from(text))
}

async fn write_score(path: &Path, content: &str, create_parent_dirs: bool) -> Result<(), CheckerError> {
    if create_parent_dirs {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                CheckerError::File(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }
    }
    tokio::fs::write(path, content)
        .await
        .map_err(|e| CheckerError::File(format!("Failed to write {}: {}", path.display(), e)))
}
