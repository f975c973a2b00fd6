use astro_happiness::cli::{self, Cli};
use astro_happiness::logger;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!(command = ?cli.command, "starting astro-happiness");

    cli::run(cli)
}
