//! Output formatting for tables command results.

use super::execute::TablesResult;
use crate::output::Outputable;

impl Outputable for TablesResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Schema: {}", self.schema));
        lines.push(String::new());

        if self.tables.is_empty() {
            lines.push("No tables found.".to_string());
            return lines.join("\n");
        }

        lines.push(format!("Tables ({}):", self.tables.len()));
        for table in &self.tables {
            lines.push(format!("  {}", table));
        }

        lines.join("\n")
    }
}
