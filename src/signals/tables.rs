//! Table detection and classification.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::strip_tags;

/// Coarse classification of what a table holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    Pricing,
    Comparison,
    Features,
    Data,
    General,
}

/// One `<table>` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRecord {
    pub kind: TableKind,
    pub rows: Vec<Vec<String>>,
    pub row_count: usize,
    pub column_count: usize,
}

/// Extract every `<table>` block, classified by keyword presence.
pub fn extract(content: &str) -> Vec<TableRecord> {
    let table_pattern = Regex::new(r"(?is)<table[^>]*>(.*?)</table>").unwrap();
    let row_pattern = Regex::new(r"(?is)<tr[^>]*>(.*?)</tr>").unwrap();
    let cell_pattern = Regex::new(r"(?is)<t[dh][^>]*>(.*?)</t[dh]>").unwrap();

    table_pattern
        .captures_iter(content)
        .map(|table_cap| {
            let body = &table_cap[1];

            let rows: Vec<Vec<String>> = row_pattern
                .captures_iter(body)
                .map(|row_cap| {
                    cell_pattern
                        .captures_iter(&row_cap[1])
                        .map(|cell_cap| strip_tags(&cell_cap[1]))
                        .collect()
                })
                .collect();

            let column_count = rows.iter().map(Vec::len).max().unwrap_or(0);

            TableRecord {
                kind: classify(&rows),
                row_count: rows.len(),
                column_count,
                rows,
            }
        })
        .collect()
}

/// Keyword classification, checked in priority order.
fn classify(rows: &[Vec<String>]) -> TableKind {
    let text = rows
        .iter()
        .flatten()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let pricing = ["price", "pricing", "cost", "$", "€", "£", "/month", "/year"];
    if pricing.iter().any(|kw| text.contains(kw)) {
        return TableKind::Pricing;
    }

    let comparison_pattern = Regex::new(r"\bvs\.?\b|\bversus\b|\bcompar").unwrap();
    if comparison_pattern.is_match(&text) {
        return TableKind::Comparison;
    }

    let features = ["feature", "spec", "capability", "supported"];
    if features.iter().any(|kw| text.contains(kw)) {
        return TableKind::Features;
    }

    // Mostly-numeric cells read as a data table.
    let cells: Vec<&String> = rows.iter().flatten().collect();
    if !cells.is_empty() {
        let numeric = cells
            .iter()
            .filter(|c| !c.is_empty() && c.chars().any(|ch| ch.is_ascii_digit()))
            .count();
        if numeric * 2 > cells.len() {
            return TableKind::Data;
        }
    }

    TableKind::General
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_table() {
        let html = "<table><tr><td>Price</td></tr></table>";
        let tables = extract(html);

        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].kind, TableKind::Pricing);
        assert_eq!(tables[0].row_count, 1);
        assert_eq!(tables[0].column_count, 1);
        assert_eq!(tables[0].rows[0][0], "Price");
    }

    #[test]
    fn test_comparison_table() {
        let html = "<table><tr><th>Tool A vs Tool B</th></tr><tr><td>faster</td></tr></table>";
        let tables = extract(html);

        assert_eq!(tables[0].kind, TableKind::Comparison);
        assert_eq!(tables[0].row_count, 2);
    }

    #[test]
    fn test_features_table() {
        let html = "<table><tr><td>Feature</td><td>Supported</td></tr></table>";
        assert_eq!(extract(html)[0].kind, TableKind::Features);
    }

    #[test]
    fn test_data_table() {
        let html = "<table><tr><td>2019</td><td>2020</td></tr><tr><td>14</td><td>legend</td></tr></table>";
        assert_eq!(extract(html)[0].kind, TableKind::Data);
    }

    #[test]
    fn test_general_table() {
        let html = "<table><tr><td>alpha</td><td>beta</td></tr></table>";
        assert_eq!(extract(html)[0].kind, TableKind::General);
    }

    #[test]
    fn test_canvas_is_not_comparison() {
        // "vs" must match as a word, not inside another one.
        let html = "<table><tr><td>canvas drawing</td></tr></table>";
        assert_eq!(extract(html)[0].kind, TableKind::General);
    }

    #[test]
    fn test_no_tables() {
        assert!(extract("<p>no tables here</p>").is_empty());
    }
}
