use anyhow::Result;
use clap::Parser;

use opcua_node_ids::cli::{self, Cli};
use opcua_node_ids::logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let mut stdout = std::io::stdout().lock();
    let outcome = cli::run(cli, &mut stdout).await?;

    if outcome != cli::Outcome::Success {
        log::warn!("Check failed");
        std::process::exit(outcome.exit_code());
    }

    Ok(())
}
