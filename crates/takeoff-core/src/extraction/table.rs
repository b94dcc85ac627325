use crate::error::TakeoffError;
use crate::extraction::PageText;

/// Optional table annotation for a decoded document.
///
/// Detection failures are reported as errors but never fail the document;
/// the caller simply omits the table fields.
pub trait TableDetector: Send + Sync {
    fn count_tables(&self, pages: &[PageText]) -> Result<usize, TakeoffError>;
}

/// Finds schedule-like tables in `pdftotext -layout` output.
///
/// A table is a run of consecutive lines that each split into at least
/// `min_columns` cells on gaps of 2+ spaces.
#[derive(Debug, Clone)]
pub struct LayoutTableDetector {
    pub min_columns: usize,
    pub min_rows: usize,
}

impl Default for LayoutTableDetector {
    fn default() -> Self {
        LayoutTableDetector {
            min_columns: 3,
            min_rows: 2,
        }
    }
}

impl TableDetector for LayoutTableDetector {
    fn count_tables(&self, pages: &[PageText]) -> Result<usize, TakeoffError> {
        if self.min_columns < 2 || self.min_rows == 0 {
            return Err(TakeoffError::TableDetection(format!(
                "need at least 2 columns and 1 row, got {} and {}",
                self.min_columns, self.min_rows
            )));
        }
        Ok(find_table_regions(pages, self.min_columns, self.min_rows).len())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRegion {
    pub page_number: usize,
    pub start_line: usize,
    pub end_line: usize,
}

/// Find the table region(s) within page text.
/// Returns ranges of line indices (end exclusive) that look like table rows.
pub fn find_table_regions(
    pages: &[PageText],
    min_columns: usize,
    min_rows: usize,
) -> Vec<TableRegion> {
    let mut regions = Vec::new();

    for page in pages {
        let lines: Vec<&str> = page.text.lines().collect();
        let mut table_start: Option<usize> = None;

        for (i, line) in lines.iter().enumerate() {
            let is_row = split_by_whitespace_gaps(line).len() >= min_columns;
            match (is_row, table_start) {
                (true, None) => table_start = Some(i),
                (false, Some(start)) => {
                    if i - start >= min_rows {
                        regions.push(TableRegion {
                            page_number: page.page,
                            start_line: start,
                            end_line: i,
                        });
                    }
                    table_start = None;
                }
                _ => {}
            }
        }

        // Table running to the end of the page
        if let Some(start) = table_start {
            if lines.len() - start >= min_rows {
                regions.push(TableRegion {
                    page_number: page.page,
                    start_line: start,
                    end_line: lines.len(),
                });
            }
        }
    }

    regions
}

/// Split a line by gaps of 2+ whitespace characters.
fn split_by_whitespace_gaps(line: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = None;
    let mut space_count = 0;
    let mut gap_start = 0;

    for (i, c) in line.char_indices() {
        if c.is_whitespace() {
            space_count += 1;
            if space_count == 1 {
                gap_start = i;
            } else if space_count == 2 {
                // Gap characters may be multi-byte (NBSP, ideographic space).
                if let Some(s) = start {
                    segments.push(&line[s..gap_start]);
                    start = None;
                }
            }
        } else {
            if start.is_none() {
                start = Some(i);
            }
            space_count = 0;
        }
    }

    if let Some(s) = start {
        segments.push(&line[s..]);
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule_page() -> PageText {
        PageText::new(
            1,
            "FAN SCHEDULE\n\
             TAG     CFM      HP     VOLTS\n\
             EF-1    1200     0.5    120V\n\
             EF-2    800      0.25   120V\n\
             \n\
             NOTES: PROVIDE BACKDRAFT DAMPER.",
        )
    }

    #[test]
    fn test_split_by_whitespace_gaps() {
        let segments = split_by_whitespace_gaps("EF-1    1200     0.5 HP");
        assert_eq!(segments, vec!["EF-1", "1200", "0.5 HP"]);
    }

    #[test]
    fn test_split_on_non_breaking_space_gaps() {
        assert_eq!(
            split_by_whitespace_gaps("A\u{a0}\u{a0}B\u{a0}\u{a0}C"),
            vec!["A", "B", "C"]
        );
        assert_eq!(
            split_by_whitespace_gaps("EF-1\u{3000}\u{3000}900 CFM"),
            vec!["EF-1", "900 CFM"]
        );
    }

    #[test]
    fn test_nbsp_schedule_counts_as_table() {
        let page = PageText::new(
            1,
            "TAG\u{a0}\u{a0}CFM\u{a0}\u{a0}HP\n\
             EF-1\u{a0}\u{a0}900\u{a0}\u{a0}0.5",
        );
        assert_eq!(LayoutTableDetector::default().count_tables(&[page]).unwrap(), 1);
    }

    #[test]
    fn test_find_table_regions() {
        let regions = find_table_regions(&[schedule_page()], 3, 2);
        assert_eq!(
            regions,
            vec![TableRegion {
                page_number: 1,
                start_line: 1,
                end_line: 4,
            }]
        );
    }

    #[test]
    fn test_single_aligned_line_is_not_a_table() {
        let page = PageText::new(1, "A  B  C\nplain text");
        assert!(find_table_regions(&[page], 3, 2).is_empty());
    }

    #[test]
    fn test_table_at_end_of_page() {
        let page = PageText::new(2, "intro\nA  B  C\nD  E  F");
        let regions = find_table_regions(&[page], 3, 2);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].end_line, 3);
    }

    #[test]
    fn test_detector_counts_and_validates() {
        let detector = LayoutTableDetector::default();
        assert_eq!(detector.count_tables(&[schedule_page()]).unwrap(), 1);

        let broken = LayoutTableDetector {
            min_columns: 1,
            min_rows: 2,
        };
        assert!(broken.count_tables(&[schedule_page()]).is_err());
    }
}
