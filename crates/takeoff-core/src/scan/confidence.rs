use crate::model::SizeMeasurement;
use rust_decimal::Decimal;

/// Any of these in the context means the tag is cross-referenced.
const REFERENCE_KEYWORDS: &[&str] = &["see", "refer", "spec", "section", "detail"];

/// Words that typically surround real equipment callouts. "filter" and
/// "motor" appear twice and are counted twice.
const EQUIPMENT_KEYWORDS: &[&str] = &[
    "supply", "return", "exhaust", "fan", "motor", "filter", "damper", "heating", "cooling",
    "filter", "motor",
];

/// Heuristic quality score for a mention, in [0.5, 1.0].
///
/// 0.5 base, +0.2 when sizes were found, +0.1 for a cross-reference
/// keyword, and +0.05 per equipment keyword entry present (at most +0.2).
/// `_tag` does not influence the score.
pub fn score_confidence(context: &str, _tag: &str, sizes: &[SizeMeasurement]) -> Decimal {
    let lower = context.to_lowercase();
    let mut score = Decimal::new(5, 1);

    if !sizes.is_empty() {
        score += Decimal::new(2, 1);
    }

    if REFERENCE_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        score += Decimal::new(1, 1);
    }

    let hits = EQUIPMENT_KEYWORDS
        .iter()
        .filter(|kw| lower.contains(*kw))
        .count();
    score += (Decimal::new(5, 2) * Decimal::from(hits)).min(Decimal::new(2, 1));

    score.min(Decimal::ONE).normalize()
}
