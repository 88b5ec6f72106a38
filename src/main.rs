use clap::Parser;
use tracing_subscriber::EnvFilter;

use schema_probe::cli::Args;
use schema_probe::DatabaseDriver;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Diagnostics go to stderr so command output stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let driver = DatabaseDriver::new(args.database_config()?);
    let output = args.command.run(&driver, args.format)?;
    println!("{}", output);
    Ok(())
}
