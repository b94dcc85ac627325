use takeoff_core::batch::DocumentOutcome;
use takeoff_core::error::TakeoffError;
use takeoff_core::model::DocumentReport;

/// Wrap batch outcomes as `{"results": [...]}`.
pub fn render_results(outcomes: &[DocumentOutcome], compact: bool) -> Result<String, TakeoffError> {
    let value = serde_json::json!({ "results": outcomes });
    let json = if compact {
        serde_json::to_string(&value)?
    } else {
        serde_json::to_string_pretty(&value)?
    };
    Ok(json)
}

pub fn print_report(report: &DocumentReport) -> Result<(), TakeoffError> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_wrapper() {
        let outcomes = vec![DocumentOutcome::failed(&TakeoffError::Extraction("bad".into()))];
        let json = render_results(&outcomes, true).unwrap();
        assert!(!json.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["results"][0]["success"], false);
        assert_eq!(value["results"][0]["error"], "PDF extraction failed: bad");
        assert!(value["results"][0].get("data").is_none());
    }
}
