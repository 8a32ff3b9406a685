//! Listing export cleaner.

use clap::Parser;
use csvfix_cli::cli::Cli;
use csvfix_cli::commands::run_fix;
use csvfix_cli::logging::init_logging;
use csvfix_cli::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("ERROR: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run_fix(&cli) {
        Ok(result) => {
            print_summary(&result);
            0
        }
        Err(error) => {
            eprintln!("ERROR: {error}");
            for cause in error.chain().skip(1) {
                eprintln!("Caused by: {cause}");
            }
            1
        }
    };
    std::process::exit(exit_code);
}
