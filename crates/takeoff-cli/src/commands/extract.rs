use std::path::{Path, PathBuf};
use takeoff_core::batch::{process_paths, BatchOptions};
use takeoff_core::error::TakeoffError;
use takeoff_core::extraction::pdftotext::PdftotextExtractor;
use takeoff_core::ExtractOptions;
use walkdir::WalkDir;

use crate::output;

pub struct Settings {
    pub detect_tables: bool,
    pub jobs: usize,
    pub context_before: usize,
    pub context_after: usize,
}

pub fn run(
    inputs: Vec<PathBuf>,
    output_file: Option<PathBuf>,
    compact: bool,
    settings: Settings,
) -> Result<(), TakeoffError> {
    let paths = collect_inputs(&inputs);
    if !PdftotextExtractor::is_available() && paths.iter().any(|p| !is_text_dump(p)) {
        tracing::warn!("pdftotext not found, PDF inputs will fail");
    }

    let options = BatchOptions {
        extract: ExtractOptions {
            context_before: settings.context_before,
            context_after: settings.context_after,
            detect_tables: settings.detect_tables,
        },
        jobs: settings.jobs,
    };
    let extractor = PdftotextExtractor::new();
    let outcomes = process_paths(&paths, &extractor, &options);
    let failed = outcomes.iter().filter(|o| !o.success).count();

    let json = output::json::render_results(&outcomes, compact)?;
    match output_file {
        Some(path) => {
            std::fs::write(&path, json)?;
            eprintln!(
                "Processed {} document(s), written to {}",
                outcomes.len(),
                path.display()
            );
            if failed > 0 {
                eprintln!("  {failed} document(s) failed");
            }
        }
        None => println!("{json}"),
    }

    Ok(())
}

/// Expand directories into the `.pdf` / `.txt` files below them, sorted.
/// Plain file arguments are kept as given, even if missing, so they show up
/// as failed results.
fn collect_inputs(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(input)
                .into_iter()
                .filter_map(Result::ok)
                .map(|entry| entry.into_path())
                .filter(|path| path.is_file() && is_supported(path))
                .collect();
            found.sort();
            paths.extend(found);
        } else {
            paths.push(input.clone());
        }
    }
    paths
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf") || ext.eq_ignore_ascii_case("txt"))
        .unwrap_or(false)
}

fn is_text_dump(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("txt"))
        .unwrap_or(false)
}
