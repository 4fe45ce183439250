use clap::Parser;
use plank::cli::commands::Cli;
use plank::cli::handlers;
use plank::io::config_io;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => {
            // No subcommand → launch the dashboard
            let config = config_io::load();
            if let Err(e) = plank::tui::run(config) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(command) => {
            init_tracing();
            if let Err(e) = handlers::dispatch(command, cli.json) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

/// Mutation tracing on stderr, opt-in via RUST_LOG. Installed for CLI runs
/// only; the TUI owns the terminal.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
