//! Output formatting for columns command results.

use super::execute::ColumnsResult;
use crate::output::{align_columns, Outputable};

impl Outputable for ColumnsResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Table: {}", self.table));
        lines.push(String::new());

        if self.columns.is_empty() {
            lines.push("No columns found.".to_string());
            return lines.join("\n");
        }

        lines.push(format!("Columns ({}):", self.columns.len()));

        let rows: Vec<Vec<String>> = self
            .columns
            .iter()
            .map(|c| {
                let nullability = if c.nullable() { "NULL" } else { "NOT NULL" };
                vec![c.name.clone(), c.data_type.clone(), nullability.to_string()]
            })
            .collect();

        for line in align_columns(&rows) {
            lines.push(format!("  {}", line));
        }

        lines.join("\n")
    }
}
