use clap::Parser;
use smart_utilities::app::{handle_fatal_error, init_logging, AppConfig, CommonArgs, RetryArgs};
use smart_utilities::input::Prompter;
use smart_utilities::visitlog::{self, VisitStore};
use tracing::debug;

/// Patient visit log
#[derive(Parser)]
#[command(name = "visitlog", version)]
#[command(about = "Record and query patient visits (kept in memory only)", long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(flatten)]
    retry: RetryArgs,
}

fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::from_args(&cli.common) {
        Ok(config) => config.with_max_attempts(cli.retry.max_attempts),
        Err(e) => handle_fatal_error(e.into(), cli.common.verbose),
    };
    init_logging(&config);

    let stdin = std::io::stdin();
    let mut prompter =
        Prompter::new(stdin.lock(), std::io::stdout()).with_max_attempts(config.max_attempts());

    match visitlog::run(&mut prompter) {
        Ok(history) => debug!("Session ended with {} patients", history.patient_count()),
        Err(e) => handle_fatal_error(e.into(), config.verbose),
    }
}
