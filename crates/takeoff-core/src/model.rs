use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Kind of a numeric rating found next to an equipment tag.
///
/// Serialized names match the keys used in take-off JSON reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SizeKind {
    #[serde(rename = "cfm")]
    FlowCfm,
    #[serde(rename = "gpm")]
    FlowGpm,
    #[serde(rename = "ton")]
    CapacityTon,
    #[serde(rename = "mbh")]
    CapacityMbh,
    #[serde(rename = "hp")]
    PowerHp,
    #[serde(rename = "voltage")]
    Voltage,
    #[serde(rename = "size_inches")]
    SizeInches,
    #[serde(rename = "size_mm")]
    SizeMm,
    #[serde(rename = "gallons")]
    VolumeGallons,
    #[serde(rename = "temp")]
    Temperature,
    #[serde(rename = "pressure")]
    Pressure,
    #[serde(rename = "rpm")]
    RotationalSpeed,
}

impl SizeKind {
    pub fn key(&self) -> &'static str {
        match self {
            SizeKind::FlowCfm => "cfm",
            SizeKind::FlowGpm => "gpm",
            SizeKind::CapacityTon => "ton",
            SizeKind::CapacityMbh => "mbh",
            SizeKind::PowerHp => "hp",
            SizeKind::Voltage => "voltage",
            SizeKind::SizeInches => "size_inches",
            SizeKind::SizeMm => "size_mm",
            SizeKind::VolumeGallons => "gallons",
            SizeKind::Temperature => "temp",
            SizeKind::Pressure => "pressure",
            SizeKind::RotationalSpeed => "rpm",
        }
    }
}

impl fmt::Display for SizeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A measurement as it appeared in the drawing text. No unit conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeMeasurement {
    #[serde(rename = "type")]
    pub kind: SizeKind,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentCategory {
    Ahu,
    Rtu,
    Chiller,
    AhuComponents,
    Vav,
    Fan,
    Pump,
    Boiler,
    CoolingTower,
    HeatExchanger,
    Tank,
    Valve,
    PlumbingFixtures,
    WaterHeater,
    Motor,
    Equipment,
}

impl EquipmentCategory {
    /// All categories in scan order.
    pub const ALL: [EquipmentCategory; 16] = [
        EquipmentCategory::Ahu,
        EquipmentCategory::Rtu,
        EquipmentCategory::Chiller,
        EquipmentCategory::AhuComponents,
        EquipmentCategory::Vav,
        EquipmentCategory::Fan,
        EquipmentCategory::Pump,
        EquipmentCategory::Boiler,
        EquipmentCategory::CoolingTower,
        EquipmentCategory::HeatExchanger,
        EquipmentCategory::Tank,
        EquipmentCategory::Valve,
        EquipmentCategory::PlumbingFixtures,
        EquipmentCategory::WaterHeater,
        EquipmentCategory::Motor,
        EquipmentCategory::Equipment,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            EquipmentCategory::Ahu => "ahu",
            EquipmentCategory::Rtu => "rtu",
            EquipmentCategory::Chiller => "chiller",
            EquipmentCategory::AhuComponents => "ahu_components",
            EquipmentCategory::Vav => "vav",
            EquipmentCategory::Fan => "fan",
            EquipmentCategory::Pump => "pump",
            EquipmentCategory::Boiler => "boiler",
            EquipmentCategory::CoolingTower => "cooling_tower",
            EquipmentCategory::HeatExchanger => "heat_exchanger",
            EquipmentCategory::Tank => "tank",
            EquipmentCategory::Valve => "valve",
            EquipmentCategory::PlumbingFixtures => "plumbing_fixtures",
            EquipmentCategory::WaterHeater => "water_heater",
            EquipmentCategory::Motor => "motor",
            EquipmentCategory::Equipment => "equipment",
        }
    }

    /// Look up a category by its key, accepting `-` in place of `_`.
    pub fn from_key(s: &str) -> Option<EquipmentCategory> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        Self::ALL.into_iter().find(|c| c.key() == wanted)
    }
}

impl fmt::Display for EquipmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One accepted equipment tag on a page, with the evidence found around it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentMention {
    pub tag: String,
    #[serde(rename = "type")]
    pub equipment_type: String,
    pub category: EquipmentCategory,
    pub sizes: Vec<SizeMeasurement>,
    pub specs_references: Vec<String>,
    /// Trimmed context window the sizes and references were read from.
    pub raw_text: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub confidence: Decimal,
    pub page_number: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecSection {
    pub reference: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub drawing_date: Option<String>,
    pub revision: Option<String>,
    pub project_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub page_count: usize,
    pub title: String,
    pub author: String,
    pub created: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    pub pages: usize,
    pub equipment_count: usize,
    pub unique_tags: usize,
    pub by_category: BTreeMap<EquipmentCategory, usize>,
}

/// Everything extracted from one decoded document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentReport {
    pub metadata: DocumentMetadata,
    pub text_hash: String,
    pub equipment: Vec<EquipmentMention>,
    pub spec_sections: Vec<SpecSection>,
    pub version_info: VersionInfo,
    pub stats: DocumentStats,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_tables: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_count: Option<usize>,
}
