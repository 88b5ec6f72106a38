mod execute;
mod output;

use clap::Args;

/// Check that the database is reachable
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  schema_probe ping                                  # Uses .schema_probe.json or DATABASE_URL
  schema_probe ping --database-url postgres://u@db/app
  schema_probe ping --connect-timeout 5              # Give up after 5 seconds")]
pub struct PingCmd {}
