use std::path::PathBuf;
use takeoff_core::batch::extractor_for;
use takeoff_core::error::TakeoffError;
use takeoff_core::extraction::pdftotext::PdftotextExtractor;
use takeoff_core::ExtractOptions;

use crate::output;

pub fn run(input_file: PathBuf, output_format: &str) -> Result<(), TakeoffError> {
    if !input_file.is_file() {
        return Err(TakeoffError::FileNotFound(input_file));
    }
    let bytes = std::fs::read(&input_file)?;
    let pdf = PdftotextExtractor::new();
    let extractor = extractor_for(&input_file, &pdf);
    let report = takeoff_core::process_pdf(&bytes, extractor, &ExtractOptions::default())?;

    match output_format {
        "json" => output::json::print_report(&report)?,
        _ => output::table::print(&report),
    }

    Ok(())
}
