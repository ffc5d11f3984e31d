//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use super::play::TerminalSession;
use crate::api;
use crate::config::Settings;
use certquiz_core::{
    Catalog, QuizController, QuizError, catalog_from_json, primitives::MAX_CATALOG_BYTES,
};
use serde_json::json;
use std::path::Path;

// =============================================================================
// CATALOG LOADING
// =============================================================================

/// Read and validate a catalog file.
///
/// The size is checked from metadata before the file is read.
pub fn load_catalog(path: &Path) -> Result<Catalog, QuizError> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        QuizError::Io(format!("Cannot read catalog '{}': {}", path.display(), e))
    })?;
    if !metadata.is_file() {
        return Err(QuizError::Io(format!(
            "Catalog path '{}' is not a regular file",
            path.display()
        )));
    }
    if metadata.len() > MAX_CATALOG_BYTES as u64 {
        return Err(QuizError::Serialization(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            MAX_CATALOG_BYTES
        )));
    }

    let bytes = std::fs::read(path).map_err(|e| {
        QuizError::Io(format!("Cannot read catalog '{}': {}", path.display(), e))
    })?;
    let catalog = catalog_from_json(&bytes)?;

    tracing::info!(
        path = %path.display(),
        stages = catalog.stage_count(),
        questions = catalog.question_count(),
        "catalog loaded"
    );
    Ok(catalog)
}

// =============================================================================
// PLAY COMMAND
// =============================================================================

/// Run the interactive terminal session on stdin/stdout.
pub fn cmd_play(catalog_path: &Path) -> Result<(), QuizError> {
    let catalog = load_catalog(catalog_path)?;
    let mut quiz = QuizController::new(catalog);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let end = TerminalSession::new(&mut quiz, stdin.lock(), stdout.lock()).run()?;

    tracing::debug!(?end, screen = %quiz.screen(), "terminal session finished");
    Ok(())
}

// =============================================================================
// VALIDATE COMMAND
// =============================================================================

/// Validate a catalog and print a summary.
pub fn cmd_validate(catalog_path: &Path, json_mode: bool) -> Result<(), QuizError> {
    let catalog = load_catalog(catalog_path)?;

    if json_mode {
        let stages: Vec<_> = catalog
            .stages()
            .iter()
            .map(|stage| {
                json!({
                    "id": stage.id,
                    "title": stage.title,
                    "questions": stage.question_count(),
                    "passingScore": stage.passing_score,
                })
            })
            .collect();
        let output = json!({
            "valid": true,
            "stages": stages,
            "questions": catalog.question_count(),
        });
        print_json(&output)?;
    } else {
        println!("Catalog OK: {}", catalog_path.display());
        println!();
        for stage in catalog.stages() {
            println!(
                "  Stage {}: {} ({} questions, pass at {})",
                stage.id,
                stage.title,
                stage.question_count(),
                stage.passing_score
            );
        }
        println!();
        println!("  Total questions: {}", catalog.question_count());
    }

    Ok(())
}

// =============================================================================
// RANK COMMAND
// =============================================================================

/// Print the tier and rank information for a percentage.
pub fn cmd_rank(catalog_path: &Path, percentage: u32, json_mode: bool) -> Result<(), QuizError> {
    let catalog = load_catalog(catalog_path)?;
    let (tier, info) = catalog.ranks().for_percentage(percentage);

    if json_mode {
        let output = json!({
            "percentage": percentage,
            "tier": tier,
            "rank": info,
        });
        print_json(&output)?;
    } else {
        println!("{}% -> {} {}", percentage, info.icon, info.title);
        if let Some(razryad) = &info.razryad {
            println!("  Qualification: {}", razryad);
        }
        if !info.description.is_empty() {
            println!("  {}", info.description);
        }
    }

    Ok(())
}

// =============================================================================
// SERVE COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_serve(settings: &Settings) -> Result<(), QuizError> {
    let catalog = load_catalog(&settings.catalog)?;

    println!("certquiz HTTP server starting...");
    println!();
    println!("Configuration:");
    println!("  Host:    {}", settings.host);
    println!("  Port:    {}", settings.port);
    println!("  Catalog: {}", settings.catalog.display());
    println!();
    println!("Endpoints:");
    for (method, path, summary) in api::ENDPOINTS {
        println!("  {:<4} {:<18} - {}", method, path, summary);
    }
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    api::run_server(&settings.bind_address(), QuizController::new(catalog)).await
}

// =============================================================================
// HELPERS
// =============================================================================

fn print_json(value: &serde_json::Value) -> Result<(), QuizError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| QuizError::Serialization(e.to_string()))?;
    println!("{}", text);
    Ok(())
}
