use std::process::ExitCode;

use clap::Parser;
use dotenv::dotenv;
use scripts::{
    cli::{parse_failure_status, Cli},
    utils::exit_status,
};
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file
    dotenv().ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Prints the usage error, or the help / version output
            let _ = e.print();
            return ExitCode::from(parse_failure_status(&e));
        }
    };

    tracing_subscriber::fmt().pretty().init();

    let result = cli.run().await;
    if let Err(e) = &result {
        error!("{e}");
    }

    ExitCode::from(exit_status(&result))
}
