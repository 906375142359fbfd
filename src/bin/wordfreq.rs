use clap::Parser;
use smart_utilities::app::{handle_fatal_error, init_logging, AppConfig, CommonArgs, RetryArgs};
use smart_utilities::input::Prompter;
use smart_utilities::wordfreq;

/// Most frequent words of a line of text
#[derive(Parser)]
#[command(name = "wordfreq", version)]
#[command(about = "Show the K most frequent words of a line", long_about = None)]
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

    if let Err(e) = wordfreq::run(&mut prompter) {
        handle_fatal_error(e.into(), config.verbose);
    }
}
