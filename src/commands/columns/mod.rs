mod execute;
mod output;

use clap::Args;

/// List the columns of a table in the public schema
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  schema_probe columns users             # Columns in declaration order
  schema_probe columns users -f json     # As a JSON document

A table that does not exist in the public schema has no columns.")]
pub struct ColumnsCmd {
    /// Table name (matched exactly, case-sensitive)
    pub table: String,
}
