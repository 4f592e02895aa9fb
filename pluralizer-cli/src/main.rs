use clap::Parser;
use pluralizer_cli::{Cli, init_logging, log_filter, run, stdout_is_terminal, use_color};

fn main() {
    let cli = Cli::parse();

    init_logging(log_filter(cli.verbose, cli.log.as_deref()));

    let color = use_color(cli.no_color, stdout_is_terminal());
    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    match run(&cli.command, stdin, &mut stdout, color) {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
