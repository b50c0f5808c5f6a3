use clap::Parser;
use stockcast_cli::Cli;
use std::process;

fn main() {
    stockcast_observability::init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    if let Err(err) = stockcast_cli::run(cli, &mut stdout) {
        tracing::error!(error = %err, "planning failed");
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}
