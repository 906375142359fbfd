use clap::Parser;
use smart_utilities::app::{handle_fatal_error, init_logging, AppConfig, CommonArgs};
use smart_utilities::input::Prompter;
use smart_utilities::slicecrossing;

/// Common values of two integer lines
#[derive(Parser)]
#[command(name = "slicecrossing", version)]
#[command(about = "Print the values two lines of integers have in common", long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::from_args(&cli.common) {
        Ok(config) => config,
        Err(e) => handle_fatal_error(e.into(), cli.common.verbose),
    };
    init_logging(&config);

    let stdin = std::io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());

    if let Err(e) = slicecrossing::run(&mut prompter) {
        handle_fatal_error(e.into(), config.verbose);
    }
}
