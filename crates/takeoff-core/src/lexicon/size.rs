use crate::lexicon::{compile_or_skip, first_capture};
use crate::model::{SizeKind, SizeMeasurement};
use regex::Regex;
use std::sync::LazyLock;

/// A measurement kind and the pattern recognizing it.
#[derive(Debug, Clone, Copy)]
pub struct SizePattern {
    pub kind: SizeKind,
    pub pattern: &'static str,
}

/// The canonical size lexicon, searched in this order.
pub const SIZE_PATTERNS: &[SizePattern] = &[
    SizePattern {
        kind: SizeKind::FlowCfm,
        pattern: r"(\d[\d,]*(?:\.\d+)?\s*(?:CFM|L/s|LS))\b",
    },
    SizePattern {
        kind: SizeKind::FlowGpm,
        pattern: r"(\d+(?:\.\d+)?\s*(?:GPM|LPM|L/m))\b",
    },
    SizePattern {
        kind: SizeKind::CapacityTon,
        pattern: r"(\d+(?:\.\d+)?\s*(?:TON|TONS|TR))\b",
    },
    SizePattern {
        kind: SizeKind::CapacityMbh,
        pattern: r"(\d+(?:,\d{3})*(?:\.\d+)?\s*(?:MBH|MMBH|BTU/hr|kBtu))\b",
    },
    SizePattern {
        kind: SizeKind::PowerHp,
        pattern: r"(\d+(?:\.\d+)?\s*(?:HP|kW))\b",
    },
    // Two alternatives: paired service voltage ("480/277V") or single ("208V").
    SizePattern {
        kind: SizeKind::Voltage,
        pattern: r"(\d{3}[-/]?\d{3}V?)\b|(\d{3}V)",
    },
    SizePattern {
        kind: SizeKind::SizeInches,
        pattern: r#"(\d+(?:\.\d+)?\s*(?:"|in|inch|IPS|NPS)\b)"#,
    },
    SizePattern {
        kind: SizeKind::SizeMm,
        pattern: r"(\d+(?:\.\d+)?\s*mm)\b",
    },
    SizePattern {
        kind: SizeKind::VolumeGallons,
        pattern: r"(\d{1,6}(?:,\d{3})?\s*(?:GAL|gallons?| liters?))\b",
    },
    SizePattern {
        kind: SizeKind::Temperature,
        pattern: r"([+-]?\d+(?:\.\d+)?\s*°?[FC])\b",
    },
    SizePattern {
        kind: SizeKind::Pressure,
        pattern: r"(\d+(?:\.\d+)?\s*(?:PSI|psig|kPa|bar))\b",
    },
    SizePattern {
        kind: SizeKind::RotationalSpeed,
        pattern: r"(\d+(?:\.\d+)?\s*RPM)\b",
    },
];

/// Compiled size lexicon.
#[derive(Debug, Clone)]
pub struct SizeLexicon {
    entries: Vec<(SizeKind, Regex)>,
}

static BUILTIN: LazyLock<SizeLexicon> = LazyLock::new(|| SizeLexicon::compile(SIZE_PATTERNS));

impl SizeLexicon {
    /// Compile a size table. Malformed patterns are skipped.
    pub fn compile(table: &[SizePattern]) -> Self {
        let entries = table
            .iter()
            .filter_map(|p| compile_or_skip(p.pattern).map(|re| (p.kind, re)))
            .collect();
        SizeLexicon { entries }
    }

    pub fn builtin() -> &'static SizeLexicon {
        &BUILTIN
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every size mention in `context`, grouped by kind in table order.
    ///
    /// Kinds are matched independently and never suppress each other:
    /// "150000 MBH" yields both an `mbh` and a `voltage` entry.
    pub fn extract(&self, context: &str) -> Vec<SizeMeasurement> {
        let mut sizes = Vec::new();
        for (kind, re) in &self.entries {
            for caps in re.captures_iter(context) {
                let value = first_capture(&caps).trim();
                if !value.is_empty() {
                    sizes.push(SizeMeasurement {
                        kind: *kind,
                        value: value.to_string(),
                    });
                }
            }
        }
        sizes
    }
}

/// Extract sizes from a context window using the built-in lexicon.
pub fn extract_sizes(context: &str) -> Vec<SizeMeasurement> {
    SizeLexicon::builtin().extract(context)
}
