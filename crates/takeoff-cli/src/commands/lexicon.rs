use takeoff_core::error::TakeoffError;
use takeoff_core::lexicon::equipment::{category_def, EquipmentLexicon};
use takeoff_core::lexicon::size::SIZE_PATTERNS;
use takeoff_core::model::EquipmentCategory;

pub fn list() -> Result<(), TakeoffError> {
    println!("Equipment categories (scan order):\n");
    for category in EquipmentLexicon::builtin().categories() {
        println!(
            "  {:<18} {} ({} patterns)",
            category.category.key(),
            category.label,
            category.patterns.len()
        );
    }
    println!("\nA tag found by an earlier category is not reported again on the same page.");
    Ok(())
}

pub fn show(key: &str) -> Result<(), TakeoffError> {
    let def = EquipmentCategory::from_key(key)
        .and_then(category_def)
        .ok_or_else(|| TakeoffError::UnknownCategory(key.to_string()))?;

    println!("{} ({})\n", def.label, def.category);
    println!("Tag patterns:");
    for pattern in def.patterns {
        println!("  {pattern}");
    }
    if !def.size_indicators.is_empty() {
        println!("\nSize indicators:");
        for pattern in def.size_indicators {
            println!("  {pattern}");
        }
    }
    Ok(())
}

pub fn sizes() -> Result<(), TakeoffError> {
    println!("Size patterns (searched in this order):\n");
    for entry in SIZE_PATTERNS {
        println!("  {:<12} {}", entry.kind.key(), entry.pattern);
    }
    Ok(())
}
