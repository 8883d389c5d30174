//! CSV header parsing and normalization.

/// Column names read from the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvHeaders {
    /// Normalized column names in file order.
    pub columns: Vec<String>,
}

impl CsvHeaders {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Normalizes a header value by trimming surrounding whitespace and a BOM.
///
/// Spaces inside the name are kept: several stored names carry a stray
/// embedded space that the rename step fixes explicitly.
pub fn normalize_header(value: &str) -> String {
    value.trim().trim_start_matches('\u{feff}').trim().to_string()
}

/// Parses a CSV line into fields, handling quoted values.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes => {
                in_quotes = true;
            }
            '"' if in_quotes => {
                // Check for escaped quote ("")
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            ',' if !in_quotes => {
                fields.push(normalize_header(&current));
                current.clear();
            }
            _ => {
                current.push(c);
            }
        }
    }

    fields.push(normalize_header(&current));
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_headers_len() {
        let headers = CsvHeaders::new(vec!["A".to_string(), "B".to_string()]);
        assert_eq!(headers.len(), 2);
        assert!(!headers.is_empty());
        assert!(CsvHeaders::new(Vec::new()).is_empty());
    }

    #[test]
    fn test_normalize_header_keeps_inner_space() {
        assert_eq!(normalize_header("  hello  "), "hello");
        assert_eq!(
            normalize_header("Adjusted_ Total_Value_1914 "),
            "Adjusted_ Total_Value_1914"
        );
        assert_eq!(normalize_header("\u{feff}University"), "University");
    }

    #[test]
    fn test_parse_csv_line_simple() {
        let result = parse_csv_line("a,b,c");
        assert_eq!(result, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_csv_line_quoted() {
        let result = parse_csv_line("\"hello, world\",b,c");
        assert_eq!(result, vec!["hello, world", "b", "c"]);
    }

    #[test]
    fn test_parse_csv_line_escaped_quotes() {
        let result = parse_csv_line("\"he said \"\"hello\"\"\",b");
        assert_eq!(result, vec!["he said \"hello\"", "b"]);
    }

    #[test]
    fn test_parse_csv_line_trailing_empty_field() {
        let result = parse_csv_line("a,b,");
        assert_eq!(result, vec!["a", "b", ""]);
    }
}
