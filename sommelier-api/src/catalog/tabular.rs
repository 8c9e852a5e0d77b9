//! Delimited text loader
//!
//! Parses comma-separated tables with a header line. Double quotes toggle a
//! quoted section in which commas are literal; the quotes themselves are
//! dropped. Rows with the wrong number of fields are skipped, not reported.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// Catalog source errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One data row, keyed by column name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Field value, or `""` for an unknown column
    pub fn field(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }
}

/// Parse table content into records, skipping the header line
pub fn parse_table(content: &str, columns: &[&str]) -> Vec<Record> {
    let mut records = Vec::new();

    for (line_no, line) in content.trim().lines().enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let values = split_line(line);
        if values.len() != columns.len() {
            debug!(
                line = line_no + 1,
                expected = columns.len(),
                found = values.len(),
                "Skipping row with mismatched field count"
            );
            continue;
        }

        let fields = columns
            .iter()
            .map(|c| c.to_string())
            .zip(values)
            .collect();
        records.push(Record { fields });
    }

    records
}

/// Read a table from disk and parse it
pub async fn load_table(path: &Path, columns: &[&str]) -> Result<Vec<Record>, CatalogError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(parse_table(&content, columns))
}

fn split_line(line: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            QUOTE => in_quotes = !in_quotes,
            DELIMITER if !in_quotes => {
                values.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    values.push(current.trim().to_string());

    values
}

#[cfg(test)]
mod tests {
    use super::*;

    const DISH_COLUMNS: [&str; 3] = ["name", "ingredients", "category"];

    #[test]
    fn test_quoted_field_keeps_commas() {
        let content = "name,ingredients,category\nFeijoada,\"arroz, feijão\",carne\n";
        let records = parse_table(content, &DISH_COLUMNS);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].field("name"), "Feijoada");
        assert_eq!(records[0].field("ingredients"), "arroz, feijão");
        assert_eq!(records[0].field("category"), "carne");
    }

    #[test]
    fn test_mismatched_rows_are_dropped() {
        let content = "name,ingredients,category\n\
                       Sushi,rice,fish\n\
                       Broken,row\n\
                       Too,many,fields,here\n\
                       Risotto,\"rice, lemon\",vegetarian\n";
        let records = parse_table(content, &DISH_COLUMNS);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].field("name"), "Sushi");
        assert_eq!(records[1].field("name"), "Risotto");
    }

    #[test]
    fn test_blank_lines_and_whitespace() {
        let content = "name,ingredients,category\r\n\r\n  Sushi ,  rice ,fish  \r\n\n";
        let records = parse_table(content, &DISH_COLUMNS);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].field("name"), "Sushi");
        assert_eq!(records[0].field("ingredients"), "rice");
        assert_eq!(records[0].field("category"), "fish");
    }

    #[test]
    fn test_header_only_yields_nothing() {
        assert!(parse_table("name,ingredients,category", &DISH_COLUMNS).is_empty());
        assert!(parse_table("", &DISH_COLUMNS).is_empty());
    }

    #[test]
    fn test_empty_trailing_field_counts() {
        let records = parse_table("a,b\nx,\n", &["a", "b"]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].field("b"), "");
    }

    #[tokio::test]
    async fn test_missing_file_is_reported() {
        let result = load_table(Path::new("/nonexistent/dishes.csv"), &DISH_COLUMNS).await;
        assert!(matches!(result, Err(CatalogError::Read { .. })));
    }
}
