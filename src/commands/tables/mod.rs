mod execute;
mod output;

use clap::Args;

/// List tables in the public schema
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  schema_probe tables              # Tables in catalog order
  schema_probe tables -f json      # As a JSON document

Tables are listed in the order the catalog returns them, not sorted.")]
pub struct TablesCmd {}
