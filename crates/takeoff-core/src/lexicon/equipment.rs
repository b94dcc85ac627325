use crate::lexicon::compile_or_skip;
use crate::model::EquipmentCategory;
use regex::Regex;
use std::sync::LazyLock;

/// One equipment category as declared in the lexicon table.
#[derive(Debug, Clone, Copy)]
pub struct CategoryDef {
    pub category: EquipmentCategory,
    /// Display label written to the `type` field of a mention.
    pub label: &'static str,
    /// Tag patterns, tried in order. Group 1 captures the tag number.
    pub patterns: &'static [&'static str],
    /// Size notations typical for the category. Informational only: the
    /// engine always searches the full size lexicon.
    pub size_indicators: &'static [&'static str],
}

/// The built-in equipment lexicon. Category order and pattern order decide
/// which duplicate of a tag survives on a page.
pub const EQUIPMENT_LEXICON: &[CategoryDef] = &[
    CategoryDef {
        category: EquipmentCategory::Ahu,
        label: "Air Handling Unit",
        patterns: &[
            r"\bAHU[- ]?(\d+[A-Z]?)\b",
            r"\bAIR HANDLING UNIT[- ]?(\d+[A-Z]?)\b",
            // make-up air unit
            r"\bMAU[- ]?(\d+[A-Z]?)\b",
            // dedicated outdoor air system
            r"\bDOAS[- ]?(\d+[A-Z]?)\b",
        ],
        size_indicators: &[
            r"(\d{1,3}(?:,\d{3})?\s*(?:CFM|L/s|LS))\s*(?:@|-)?\s*([+-]?\d+(?:\.\d+)?\s*°F)?",
            r"(\d+(?:,\d{3})*\s*(?:MBH|BTU/hr))",
            r"(\d+(?:\.\d+)?\s*(?:HP|kW))",
        ],
    },
    CategoryDef {
        category: EquipmentCategory::Rtu,
        label: "Roof Top Unit",
        patterns: &[
            r"\bRTU[- ]?(\d+[A-Z]?)\b",
            r"\bROOFTOP\s*UNIT[- ]?(\d+[A-Z]?)\b",
            r"\bRTU's?\s*-?(\d+[A-Z]?)\b",
        ],
        size_indicators: &[
            r"(\d{1,3}(?:,\d{3})?\s*(?:CFM|L/s|LS))",
            r"(\d+(?:,\d{3})*\s*(?:MBH|TON|TONS))",
        ],
    },
    CategoryDef {
        category: EquipmentCategory::Chiller,
        label: "Chiller",
        patterns: &[
            r"\bCHILL?ER[- ]?(\d+[A-Z]?)\b",
            r"\bCHW[- ]?(\d+[A-Z]?)\b",
            r"\bCHWP[- ]?(\d+[A-Z]?)\b",
        ],
        size_indicators: &[
            r"(\d+(?:\.\d+)?\s*(?:TON|TONS|TR))",
            r"(\d+(?:,\d{3})*\s*(?:MBH|kW))",
        ],
    },
    CategoryDef {
        category: EquipmentCategory::AhuComponents,
        label: "AHU Component",
        patterns: &[
            r"\b(?:HV|AV|SA|EA|RA|OA)\s*DAMPER[- ]?(\d+[A-Z]?)\b",
            r"\b(?:HV|AV|SA|EA|RA|OA)\s*FAN[- ]?(\d+[A-Z]?)\b",
            r"\b(?:HX|COIL|HEATER)[- ]?(\d+[A-Z]?)\b",
            r"\b(?:FILTER|FILTERS)[- ]?(\d+[A-Z]?)\b",
            r"\b(?:FF|FINAL FILTER)[- ]?(\d+[A-Z]?)\b",
        ],
        size_indicators: &[],
    },
    CategoryDef {
        category: EquipmentCategory::Vav,
        label: "VAV Box",
        patterns: &[
            r"\bVAV[- ]?(\d+[A-Z]?)\b",
            r"\bVAVs?[- ]?(\d+[A-Z]?)\b",
            r"\bTERMINAL\s*UNIT[- ]?(\d+[A-Z]?)\b",
            r"\bTU[- ]?(\d+[A-Z]?)\b",
        ],
        size_indicators: &[r"(\d+(?:,\d{3})?\s*(?:CFM|L/s|LS))"],
    },
    CategoryDef {
        category: EquipmentCategory::Fan,
        label: "Fan",
        patterns: &[
            r"\b(?:SF|EF|DF|SF-EX|OF|POF|REF|FANS?)[- ]?(\d+[A-Z]?)\b",
            r"\b(?:SUPPLY|EXHAUST|RETURN|DOOR|RELIEF)\s*FAN[- ]?(\d+[A-Z]?)\b",
        ],
        size_indicators: &[
            r"(\d+(?:,\d{3})?\s*(?:CFM|L/s|LS|CM))",
            r"(\d+(?:\.\d+)?\s*(?:HP|kW))",
        ],
    },
    CategoryDef {
        category: EquipmentCategory::Pump,
        label: "Pump",
        patterns: &[
            r"\b(?:PUMP|PUMPS)[- ]?(\d+[A-Z]?)\b",
            r"\b(?:CP|CP-|CHWP|HWP|SUMP|P)-(\d+[A-Z]?)\b",
            // boiler feed
            r"\b(?:BP|BFP)[- ]?(\d+[A-Z]?)\b",
        ],
        size_indicators: &[
            r"(\d+(?:\.\d+)?\s*(?:HP|kW))",
            r"(\d+(?:,\d{3})?\s*(?:GPM|LPM))",
            r"(\d+(?:\.\d+)?\s*(?:FT|PSI|m|mH|mWC))",
        ],
    },
    CategoryDef {
        category: EquipmentCategory::Boiler,
        label: "Boiler",
        patterns: &[
            r"\b(?:BLR|BOILER)[- ]?(\d+[A-Z]?)\b",
            r"\b(?:HWB|HW BOILER)[- ]?(\d+[A-Z]?)\b",
        ],
        size_indicators: &[
            r"(\d+(?:,\d{3})*\s*(?:MBH|BTU/hr|MMBH))",
            r"(\d+(?:\.\d+)?\s*HP)",
        ],
    },
    CategoryDef {
        category: EquipmentCategory::CoolingTower,
        label: "Cooling Tower",
        patterns: &[
            r"\b(?:CT|Cooling Tower|CT[- ]?)\s*(\d+[A-Z]?)\b",
            r"\b(?:CT[- ]?(\d+))\b",
        ],
        size_indicators: &[r"(\d+(?:\.\d+)?\s*(?:TON|TONS|TR))"],
    },
    CategoryDef {
        category: EquipmentCategory::HeatExchanger,
        label: "Heat Exchanger",
        patterns: &[
            r"\b(?:HX|HEAT EXCHANGER|HEATER)[- ]?(\d+[A-Z]?)\b",
            r"\b(?:PHE|PLATE HX)[- ]?(\d+[A-Z]?)\b",
        ],
        size_indicators: &[],
    },
    CategoryDef {
        category: EquipmentCategory::Tank,
        label: "Tank",
        patterns: &[
            r"\b(?:TANK|TK|TANK[- ]?)\s*(\d+[A-Z]?)\b",
            r"\b(?:DHW|HW|CW|HWT|CWT|HTR)[- ]?TANK[- ]?(\d+[A-Z]?)\b",
        ],
        size_indicators: &[
            r"(\d+(?:,\d{3})?\s*(?:GAL|L| liters?| gallons?))\b",
            r"(\d+(?:\.\d+)?\s*(?:PSI|kPa))",
        ],
    },
    CategoryDef {
        category: EquipmentCategory::Valve,
        label: "Valve",
        patterns: &[
            r"\b(?:CV|FCV|GCV|MCV|TCV|GLV)[- ]?(\d+[A-Z]?)\b",
            r"\b(?:VALVE)[- ]?(\d+[A-Z]?)\b",
            r"\b(?:BFP|BYPASS|FEED)[- ]?VALVE[- ]?(\d+[A-Z]?)\b",
        ],
        size_indicators: &[
            r#"(\d+(?:\.\d+)?\s*(?:in|"|inch|IPS|NPS))\b"#,
            r#"(?:size|sz)[. ]*(\d+(?:\.\d+)?\s*(?:in|"|inch|IPS|NPS))"#,
        ],
    },
    CategoryDef {
        category: EquipmentCategory::PlumbingFixtures,
        label: "Plumbing Fixture",
        patterns: &[
            r"\b(?:WC|WC-|WATER CLOSET)[- ]?(\d+[A-Z]?)\b",
            r"\b(?:LAV|LAV-|LAVATORY)[- ]?(\d+[A-Z]?)\b",
            r"\b(?:UR|UR-|URINAL)[- ]?(\d+[A-Z]?)\b",
            r"\b(?:DH|DH-|DRINKING FOUNTAIN)[- ]?(\d+[A-Z]?)\b",
            r"\b(?:SH|SH-|SHOWER)[- ]?(\d+[A-Z]?)\b",
            r"\b(?:SS|SINK|SS-|SERVICE SINK)[- ]?(\d+[A-Z]?)\b",
            r"\b(?:HB|HB-|HOSE BIB)[- ]?(\d+[A-Z]?)\b",
        ],
        size_indicators: &[],
    },
    CategoryDef {
        category: EquipmentCategory::WaterHeater,
        label: "Water Heater",
        patterns: &[
            r"\b(?:WH|WH-|WATER HEATER)[- ]?(\d+[A-Z]?)\b",
            r"\b(?:DHW)[- ]?(\d+[A-Z]?)\b",
            r"\b(?:STORAGE\s*HEATER|HEATER\s*STORAGE)[- ]?(\d+[A-Z]?)\b",
        ],
        size_indicators: &[
            r"(\d+(?:,\d{3})?\s*(?:GAL|kBtu))",
            r"(\d+(?:\.\d+)?\s*(?:kW|BTU/hr))",
        ],
    },
    CategoryDef {
        category: EquipmentCategory::Motor,
        label: "Motor",
        patterns: &[
            r"\b(?:M(?:OTOR)?[- ]?(\d+[A-Z]?))\b",
            r"\b(?:M[/-]?(\d+[A-Z]?))\b",
        ],
        size_indicators: &[
            r"(\d+(?:\.\d+)?\s*(?:HP|kW))",
            r"(\d+(?:\.\d+)?\s*RPM)",
            r"(\d+(?:\.\d+)?\s*(?:VOLTS|V))",
        ],
    },
    CategoryDef {
        category: EquipmentCategory::Equipment,
        label: "Equipment",
        patterns: &[
            r"\b(?:EQ|EQUIPMENT)[- ]?(\d+[A-Z]?)\b",
            r"\b(?:EU|Equipment\s*Unit)[- ]?(\d+[A-Z]?)\b",
        ],
        size_indicators: &[],
    },
];

/// A category with its tag patterns compiled.
#[derive(Debug, Clone)]
pub struct CompiledCategory {
    pub category: EquipmentCategory,
    pub label: &'static str,
    pub patterns: Vec<Regex>,
}

/// Compiled equipment lexicon, categories in table order.
#[derive(Debug, Clone)]
pub struct EquipmentLexicon {
    categories: Vec<CompiledCategory>,
}

static BUILTIN: LazyLock<EquipmentLexicon> =
    LazyLock::new(|| EquipmentLexicon::compile(EQUIPMENT_LEXICON));

impl EquipmentLexicon {
    /// Compile a category table. A pattern that fails to compile is dropped
    /// from its category; the other patterns and categories are unaffected.
    pub fn compile(table: &[CategoryDef]) -> Self {
        let categories = table
            .iter()
            .map(|def| CompiledCategory {
                category: def.category,
                label: def.label,
                patterns: def
                    .patterns
                    .iter()
                    .filter_map(|p| compile_or_skip(p))
                    .collect(),
            })
            .collect();
        EquipmentLexicon { categories }
    }

    pub fn builtin() -> &'static EquipmentLexicon {
        &BUILTIN
    }

    pub fn categories(&self) -> &[CompiledCategory] {
        &self.categories
    }
}

/// Find the table entry for a category.
pub fn category_def(category: EquipmentCategory) -> Option<&'static CategoryDef> {
    EQUIPMENT_LEXICON.iter().find(|d| d.category == category)
}
