use std::fmt;

const KEY_HEADER: &str = "key";
const VALUE_HEADER: &str = "value";

/// Rendered `key | value` listing produced by `show`
#[derive(Debug, Clone, PartialEq)]
pub struct RecordTable {
    rows: Vec<(String, String)>,
    omitted: usize,
}

impl RecordTable {
    pub fn new(rows: Vec<(String, String)>, omitted: usize) -> Self {
        Self { rows, omitted }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), 0)
    }

    pub fn rows(&self) -> &[(String, String)] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Entries left out because of the row limit
    pub fn omitted(&self) -> usize {
        self.omitted
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for RecordTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() && self.omitted == 0 {
            return write!(f, "(empty)");
        }

        // Column widths
        let key_width = self
            .rows
            .iter()
            .map(|(k, _)| k.chars().count())
            .fold(KEY_HEADER.len(), usize::max);
        let value_width = self
            .rows
            .iter()
            .map(|(_, v)| v.chars().count())
            .fold(VALUE_HEADER.len(), usize::max);

        writeln!(
            f,
            "{:kw$} | {:vw$}",
            KEY_HEADER,
            VALUE_HEADER,
            kw = key_width,
            vw = value_width
        )?;
        writeln!(f, "{}-+-{}", "-".repeat(key_width), "-".repeat(value_width))?;

        for (key, value) in &self.rows {
            writeln!(
                f,
                "{:kw$} | {:vw$}",
                key,
                value,
                kw = key_width,
                vw = value_width
            )?;
        }

        write!(f, "\n{} record(s)", self.rows.len())?;
        if self.omitted > 0 {
            write!(f, ", {} more not shown", self.omitted)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table() {
        assert_eq!(RecordTable::empty().to_string(), "(empty)");
    }

    #[test]
    fn test_table_layout() {
        let table = RecordTable::new(
            vec![
                ("a".to_string(), "1".to_string()),
                ("long_key".to_string(), "x".to_string()),
            ],
            0,
        );

        let rendered = table.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "key      | value");
        assert_eq!(lines[1], "---------+------");
        assert_eq!(lines[2], "a        | 1    ");
        assert_eq!(lines[3], "long_key | x    ");
        assert_eq!(lines[5], "2 record(s)");
    }

    #[test]
    fn test_omitted_footer() {
        let table = RecordTable::new(vec![("a".to_string(), "1".to_string())], 3);
        assert!(table.to_string().ends_with("1 record(s), 3 more not shown"));
        assert_eq!(table.omitted(), 3);
    }
}
